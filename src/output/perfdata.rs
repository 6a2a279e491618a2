//! Hop table and performance data.
//!
//! ```text
//! Hops:
//! 1. r1 0% 10 5.1 5 4.8 5.6 0.2
//! 2. r2 0% 10 9.9 10.2 9.1 12 0.8 | 'hop_r1_rta'=5ms;; 'hop_r1_pl'=0%;; 'hop_r2_rta'=10.2ms;; 'hop_r2_pl'=0%;;
//! ```
//!
//! Columns follow mtr's report: number, host, loss, sent, last, avg, best,
//! worst, standard deviation. The perfdata section follows the last row.

use crate::report::types::{Hub, MtrReport};

/// Render the hop table with trailing perfdata, `None` for an empty report.
pub fn render_performance(report: &MtrReport) -> Option<String> {
    if report.hubs.is_empty() {
        return None;
    }

    let rows: Vec<String> = report.hubs.iter().map(hop_row).collect();
    let metrics: Vec<String> = report.hubs.iter().map(hop_metrics).collect();

    Some(format!("Hops:\n{} | {}", rows.join("\n"), metrics.join(" ")))
}

fn hop_row(hub: &Hub) -> String {
    format!(
        "{}. {} {}% {} {} {} {} {} {}",
        hub.count,
        hub.host,
        hub.loss_percent,
        hub.sent,
        hub.last_ms,
        hub.avg_ms,
        hub.best_ms,
        hub.worst_ms,
        hub.stdev_ms
    )
}

fn hop_metrics(hub: &Hub) -> String {
    format!(
        "'hop_{host}_rta'={}ms;; 'hop_{host}_pl'={}%;;",
        hub.avg_ms,
        hub.loss_percent,
        host = hub.host
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> MtrReport {
        serde_json::from_str(
            r#"{"hubs": [
                {"count": 1, "host": "r1", "Loss%": 0.0, "Snt": 10, "Last": 5.1, "Avg": 5.0, "Best": 4.8, "Wrst": 5.6, "StDev": 0.2},
                {"count": 2, "host": "r2", "Loss%": 0.0, "Snt": 10, "Last": 9.9, "Avg": 10.2, "Best": 9.1, "Wrst": 12.0, "StDev": 0.8}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_block_covers_every_hop_in_order() {
        let block = render_performance(&report()).unwrap();
        assert_eq!(
            block,
            "Hops:\n\
             1. r1 0% 10 5.1 5 4.8 5.6 0.2\n\
             2. r2 0% 10 9.9 10.2 9.1 12 0.8 | \
             'hop_r1_rta'=5ms;; 'hop_r1_pl'=0%;; 'hop_r2_rta'=10.2ms;; 'hop_r2_pl'=0%;;"
        );
    }

    #[test]
    fn test_empty_report_has_no_block() {
        let empty: MtrReport = serde_json::from_str(r#"{"hubs": []}"#).unwrap();
        assert_eq!(render_performance(&empty), None);
    }
}
