//! Compiled pattern tokens.

use std::fmt;

/// A single segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternToken {
    /// `*`: an unconstrained run of zero or more hops.
    AnyHop,
    /// `*N-M`: advance by any amount in `min..=max`.
    OffsetRange { min: usize, max: usize },
    /// `*N`: advance by exactly `n`.
    FixedOffset { n: usize },
    /// A named hop that must appear at one of the candidate positions.
    Host(HostExpectation),
}

/// A named hop with optional per-hop ceilings.
#[derive(Debug, Clone, PartialEq)]
pub struct HostExpectation {
    /// Host name or address, compared by exact string equality.
    pub identity: String,
    /// Maximum average latency in milliseconds (inclusive).
    pub latency_ceiling_ms: Option<f64>,
    /// Maximum packet loss in percent (inclusive).
    pub loss_ceiling_percent: Option<f64>,
}

impl HostExpectation {
    /// A bare host expectation without thresholds.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            latency_ceiling_ms: None,
            loss_ceiling_percent: None,
        }
    }

    pub fn with_latency_ceiling(mut self, ceiling_ms: f64) -> Self {
        self.latency_ceiling_ms = Some(ceiling_ms);
        self
    }

    pub fn with_loss_ceiling(mut self, ceiling_percent: f64) -> Self {
        self.loss_ceiling_percent = Some(ceiling_percent);
        self
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternToken::AnyHop => write!(f, "*"),
            PatternToken::OffsetRange { min, max } => write!(f, "*{}-{}", min, max),
            PatternToken::FixedOffset { n } => write!(f, "*{}", n),
            PatternToken::Host(host) => {
                write!(f, "{}", host.identity)?;
                if host.latency_ceiling_ms.is_some() || host.loss_ceiling_percent.is_some() {
                    write!(f, "[")?;
                    if let Some(latency) = host.latency_ceiling_ms {
                        write!(f, "{}", latency)?;
                    }
                    write!(f, ":")?;
                    if let Some(loss) = host.loss_ceiling_percent {
                        write!(f, "{}", loss)?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
        }
    }
}
