use crate::errors::ArbiterError;
use crate::models::{ArbiterEvidence, ArbiterVerdict};

/// External judge consulted for ambiguous pairs.
pub trait ArbiterProvider: Send + Sync {
    fn arbitrate(&self, evidence: &ArbiterEvidence) -> Result<ArbiterVerdict, ArbiterError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool {
        true
    }
}
