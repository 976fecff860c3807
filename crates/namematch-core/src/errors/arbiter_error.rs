/// Arbiter capability errors.
#[derive(Debug, thiserror::Error)]
pub enum ArbiterError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("arbiter call failed: {reason}")]
    CallFailed { reason: String },

    #[error("arbiter call timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("malformed arbiter response: {reason}")]
    MalformedResponse { reason: String },
}
