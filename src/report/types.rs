//! mtr JSON report types.
//!
//! `mtr --json` emits:
//! ```text
//! {"report": {"mtr": {"src": .., "dst": .., "tests": .., ...},
//!             "hubs": [{"count": 1, "host": "..", "Loss%": 0.0, "Snt": 10,
//!                       "Last": .., "Avg": .., "Best": .., "Wrst": .., "StDev": ..}]}}
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Root of the mtr JSON document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MtrDocument {
    pub report: MtrReport,
}

/// The report section: run metadata and the ordered hop table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MtrReport {
    #[serde(default)]
    pub mtr: MtrRunInfo,

    /// Hops in traversal order.
    pub hubs: Vec<Hub>,
}

impl MtrReport {
    /// Re-index the hop table 0-based for matching.
    pub fn observations(&self) -> Vec<HopObservation> {
        self.hubs
            .iter()
            .enumerate()
            .map(|(index, hub)| hub.observation(index))
            .collect()
    }
}

/// Run metadata. Only used for logging.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MtrRunInfo {
    pub src: String,
    pub dst: String,
    #[serde(deserialize_with = "number_or_string")]
    pub tests: u32,
}

/// One row of the mtr report.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hub {
    /// 1-based hop number as printed by mtr.
    #[serde(deserialize_with = "number_or_string")]
    pub count: u32,

    pub host: String,

    #[serde(rename = "Loss%")]
    pub loss_percent: f64,

    #[serde(rename = "Snt", default)]
    pub sent: u32,

    #[serde(rename = "Last", default)]
    pub last_ms: f64,

    #[serde(rename = "Avg")]
    pub avg_ms: f64,

    #[serde(rename = "Best", default)]
    pub best_ms: f64,

    #[serde(rename = "Wrst", default)]
    pub worst_ms: f64,

    #[serde(rename = "StDev", default)]
    pub stdev_ms: f64,
}

impl Hub {
    pub fn observation(&self, index: usize) -> HopObservation {
        HopObservation {
            index,
            host: self.host.clone(),
            avg_latency_ms: self.avg_ms,
            loss_percent: self.loss_percent,
        }
    }
}

/// Older mtr releases quote integers (`"count": "1"`, `"tests": "10"`), newer ones do not.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// The per-hop view the checks work on.
#[derive(Debug, Clone, PartialEq)]
pub struct HopObservation {
    /// 0-based position in the path.
    pub index: usize,
    pub host: String,
    pub avg_latency_ms: f64,
    pub loss_percent: f64,
}

impl HopObservation {
    pub fn new(
        index: usize,
        host: impl Into<String>,
        avg_latency_ms: f64,
        loss_percent: f64,
    ) -> Self {
        Self {
            index,
            host: host.into(),
            avg_latency_ms,
            loss_percent,
        }
    }
}

impl fmt::Display for HopObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} avg={}ms loss={}%",
            self.index + 1,
            self.host,
            self.avg_latency_ms,
            self.loss_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "report": {
            "mtr": {"src": "probe", "dst": "example.net", "tos": 0, "tests": 10, "psize": "64", "bitpattern": "0x00"},
            "hubs": [
                {"count": 1, "host": "r1", "Loss%": 0.0, "Snt": 10, "Last": 5.1, "Avg": 5.0, "Best": 4.8, "Wrst": 5.6, "StDev": 0.2},
                {"count": "2", "host": "r2", "Loss%": 10.0, "Snt": 10, "Last": 9.9, "Avg": 10.2, "Best": 9.1, "Wrst": 12.0, "StDev": 0.8}
            ]
        }
    }"#;

    #[test]
    fn test_decode_report() {
        let doc: MtrDocument = serde_json::from_str(REPORT).unwrap();
        assert_eq!(doc.report.mtr.dst, "example.net");
        assert_eq!(doc.report.hubs.len(), 2);
        assert_eq!(doc.report.hubs[0].count, 1);
        assert_eq!(doc.report.hubs[1].count, 2);
        assert_eq!(doc.report.hubs[1].loss_percent, 10.0);
    }

    #[test]
    fn test_observations_are_zero_based() {
        let doc: MtrDocument = serde_json::from_str(REPORT).unwrap();
        let hops = doc.report.observations();
        assert_eq!(hops[0], HopObservation::new(0, "r1", 5.0, 0.0));
        assert_eq!(hops[1], HopObservation::new(1, "r2", 10.2, 10.0));
    }

    #[test]
    fn test_decode_quoted_integers() {
        let json = r#"{
            "report": {
                "mtr": {"src": "probe", "dst": "t", "tos": "0x0", "psize": "64", "bitpattern": "0x00", "tests": "10"},
                "hubs": [
                    {"count": "1", "host": "r1", "Loss%": 0.0, "Snt": 10, "Last": 5.1, "Avg": 5.0, "Best": 4.8, "Wrst": 5.6, "StDev": 0.2},
                    {"count": "2", "host": "r2", "Loss%": 20.0, "Snt": 10, "Last": 9.9, "Avg": 10.2, "Best": 9.1, "Wrst": 12.0, "StDev": 0.8}
                ]
            }
        }"#;
        let doc: MtrDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.report.mtr.tests, 10);
        assert_eq!(doc.report.mtr.dst, "t");
        assert_eq!(doc.report.hubs[1].count, 2);
        assert_eq!(doc.report.observations()[1], HopObservation::new(1, "r2", 10.2, 20.0));
    }

    #[test]
    fn test_missing_run_info_uses_defaults() {
        let json = r#"{"report": {"mtr": {"src": "probe"}, "hubs": []}}"#;
        let doc: MtrDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.report.mtr.tests, 0);
        assert_eq!(doc.report.mtr.dst, "");
    }

    #[test]
    fn test_bad_count_is_rejected() {
        let json = r#"{"report": {"hubs": [{"count": "x", "host": "r1", "Loss%": 0.0, "Avg": 1.0}]}}"#;
        assert!(serde_json::from_str::<MtrDocument>(json).is_err());
    }
}
