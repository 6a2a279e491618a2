//! Required-router membership.

use crate::checks::violation::Violation;
use crate::report::types::HopObservation;

/// Routers that must appear somewhere in the path, in the order the operator listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterSet {
    routers: Vec<String>,
}

impl RouterSet {
    pub fn new(routers: Vec<String>) -> Self {
        Self { routers }
    }

    /// Parse `[r1, r2, r3]`: brackets and spaces are dropped, then split on `,`.
    pub fn parse(list: &str) -> Self {
        let cleaned: String = list
            .trim_matches(|c| c == '[' || c == ']')
            .chars()
            .filter(|c| *c != ' ')
            .collect();

        Self {
            routers: cleaned.split(',').map(str::to_string).collect(),
        }
    }

    pub fn routers(&self) -> &[String] {
        &self.routers
    }

    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }

    /// Fail on the first listed router absent from the path.
    pub fn check(&self, path: &[HopObservation]) -> Result<(), Violation> {
        match self
            .routers
            .iter()
            .find(|router| !path.iter().any(|hop| &hop.host == *router))
        {
            Some(missing) => Err(Violation::RouterMissing {
                host: missing.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hops() -> Vec<HopObservation> {
        ["r1", "r2", "r3"]
            .iter()
            .enumerate()
            .map(|(i, host)| HopObservation::new(i, *host, 1.0, 0.0))
            .collect()
    }

    #[test]
    fn test_parse_bracketed_list() {
        let set = RouterSet::parse("[r3, r1 ,10.0.0.1]");
        assert_eq!(set.routers(), &["r3", "r1", "10.0.0.1"]);
    }

    #[test]
    fn test_parse_bare_list() {
        let set = RouterSet::parse("r1,r2");
        assert_eq!(set.routers(), &["r1", "r2"]);
    }

    #[test]
    fn test_membership_ignores_order() {
        let set = RouterSet::parse("[r3,r1]");
        assert!(set.check(&hops()).is_ok());
    }

    #[test]
    fn test_first_missing_router_is_reported() {
        let set = RouterSet::parse("[r1,r7,r8]");
        assert_eq!(
            set.check(&hops()),
            Err(Violation::RouterMissing { host: "r7".into() })
        );
    }
}
