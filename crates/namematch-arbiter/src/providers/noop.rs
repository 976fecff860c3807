use namematch_core::errors::ArbiterError;
use namematch_core::models::{ArbiterEvidence, ArbiterVerdict};
use namematch_core::traits::ArbiterProvider;

/// Arbiter that is never available. The gate skips it entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopArbiter;

impl ArbiterProvider for NoopArbiter {
    fn arbitrate(&self, _evidence: &ArbiterEvidence) -> Result<ArbiterVerdict, ArbiterError> {
        Err(ArbiterError::ProviderUnavailable {
            provider: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "noop"
    }

    fn is_available(&self) -> bool {
        false
    }
}
