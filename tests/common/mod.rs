//! Shared utilities for integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use check_mtr::config::CheckConfig;
use check_mtr::report::{parse_report, HopObservation, MtrReport};

/// Build an mtr `--json` document from `(host, avg_ms, loss_percent)` rows.
pub fn report_json(hops: &[(&str, f64, f64)]) -> String {
    let hubs: Vec<_> = hops
        .iter()
        .enumerate()
        .map(|(i, (host, avg, loss))| {
            json!({
                "count": i + 1,
                "host": host,
                "Loss%": loss,
                "Snt": 10,
                "Last": avg,
                "Avg": avg,
                "Best": avg,
                "Wrst": avg,
                "StDev": 0.0,
            })
        })
        .collect();

    json!({
        "report": {
            "mtr": {"src": "probe", "dst": "target.example", "tos": 0, "tests": 10},
            "hubs": hubs,
        }
    })
    .to_string()
}

/// Decoded report for the given rows.
#[allow(dead_code)]
pub fn report(hops: &[(&str, f64, f64)]) -> MtrReport {
    parse_report(report_json(hops).as_bytes()).unwrap()
}

/// 0-based observations for the given rows.
#[allow(dead_code)]
pub fn path(hops: &[(&str, f64, f64)]) -> Vec<HopObservation> {
    report(hops).observations()
}

/// A fake mtr executable living in its own temporary directory.
#[allow(dead_code)]
pub struct FakeMtr {
    _dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl FakeMtr {
    /// A shell script standing in for mtr; its arguments are ignored.
    pub fn with_script(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mtr");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Self { _dir: dir, path }
    }

    /// Prints `json` on stdout and exits successfully.
    pub fn printing(json: &str) -> Self {
        Self::with_script(&format!("cat <<'REPORT'\n{}\nREPORT", json))
    }

    /// Config pointing the check at this fake.
    pub fn config(&self) -> CheckConfig {
        let mut config = CheckConfig::default();
        config.mtr.path = self.path.to_string_lossy().into_owned();
        config.mtr.timeout_secs = 5;
        config
    }
}
