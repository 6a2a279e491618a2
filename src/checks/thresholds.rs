//! Global latency/loss ceilings.

use crate::checks::violation::{Scope, Violation};
use crate::report::types::HopObservation;

/// Ceilings applied uniformly to every hop in the path.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalThresholds {
    pub max_latency_ms: Option<f64>,
    pub max_loss_percent: Option<f64>,
}

impl GlobalThresholds {
    pub fn is_empty(&self) -> bool {
        self.max_latency_ms.is_none() && self.max_loss_percent.is_none()
    }

    /// Fail on the first hop, in path order, above either ceiling.
    ///
    /// Within one hop latency is checked before loss.
    pub fn check(&self, path: &[HopObservation]) -> Result<(), Violation> {
        for hop in path {
            if let Some(ceiling) = self.max_latency_ms {
                if hop.avg_latency_ms > ceiling {
                    return Err(Violation::LatencyExceeded {
                        scope: Scope::Global,
                        hop_index: hop.index,
                        host: hop.host.clone(),
                        observed: hop.avg_latency_ms,
                        ceiling,
                    });
                }
            }

            if let Some(ceiling) = self.max_loss_percent {
                if hop.loss_percent > ceiling {
                    return Err(Violation::LossExceeded {
                        scope: Scope::Global,
                        hop_index: hop.index,
                        host: hop.host.clone(),
                        observed: hop.loss_percent,
                        ceiling,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::violation::ViolationKind;

    fn hops() -> Vec<HopObservation> {
        vec![
            HopObservation::new(0, "r1", 5.0, 0.0),
            HopObservation::new(1, "r2", 10.0, 0.0),
            HopObservation::new(2, "r3", 15.0, 25.0),
        ]
    }

    #[test]
    fn test_within_ceilings_passes() {
        let thresholds = GlobalThresholds {
            max_latency_ms: Some(15.0),
            max_loss_percent: Some(25.0),
        };
        assert!(thresholds.check(&hops()).is_ok());
    }

    #[test]
    fn test_no_ceilings_passes() {
        assert!(GlobalThresholds::default().check(&hops()).is_ok());
    }

    #[test]
    fn test_first_latency_offender_is_cited() {
        let thresholds = GlobalThresholds {
            max_latency_ms: Some(8.0),
            max_loss_percent: None,
        };
        let violation = thresholds.check(&hops()).unwrap_err();
        assert_eq!(violation.kind(), ViolationKind::LatencyExceeded);
        assert_eq!(violation.hop_index(), Some(1));
        assert_eq!(violation.host(), Some("r2"));
    }

    #[test]
    fn test_loss_offender_is_cited() {
        let thresholds = GlobalThresholds {
            max_latency_ms: None,
            max_loss_percent: Some(10.0),
        };
        let violation = thresholds.check(&hops()).unwrap_err();
        assert_eq!(violation.kind(), ViolationKind::LossExceeded);
        assert_eq!(violation.hop_index(), Some(2));
    }

    #[test]
    fn test_path_order_wins_over_check_kind() {
        let mut path = hops();
        path[0].loss_percent = 50.0;
        let thresholds = GlobalThresholds {
            max_latency_ms: Some(8.0),
            max_loss_percent: Some(10.0),
        };
        let violation = thresholds.check(&path).unwrap_err();
        assert_eq!(violation.kind(), ViolationKind::LossExceeded);
        assert_eq!(violation.hop_index(), Some(0));
    }
}
