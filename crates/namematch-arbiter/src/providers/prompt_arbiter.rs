use namematch_core::errors::ArbiterError;
use namematch_core::models::{ArbiterEvidence, ArbiterVerdict};
use namematch_core::traits::ArbiterProvider;
use tracing::debug;

use crate::prompt::{parse_verdict, render_prompt};

/// A text-in, text-out model endpoint.
pub trait TextCompletion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, ArbiterError>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool {
        true
    }
}

/// Adapts a [`TextCompletion`] into an [`ArbiterProvider`] by rendering the
/// evidence as a prompt and parsing the reply.
pub struct PromptArbiter<C> {
    completion: C,
}

impl<C: TextCompletion> PromptArbiter<C> {
    pub fn new(completion: C) -> Self {
        Self { completion }
    }
}

impl<C: TextCompletion> ArbiterProvider for PromptArbiter<C> {
    fn arbitrate(&self, evidence: &ArbiterEvidence) -> Result<ArbiterVerdict, ArbiterError> {
        let prompt = render_prompt(evidence)?;
        let reply = self.completion.complete(&prompt)?;
        let verdict = parse_verdict(&reply);
        debug!(
            provider = self.completion.name(),
            decision = ?verdict.decision,
            confidence = %verdict.confidence,
            "arbiter reply parsed"
        );
        Ok(verdict)
    }

    fn name(&self) -> &str {
        self.completion.name()
    }

    fn is_available(&self) -> bool {
        self.completion.is_available()
    }
}
