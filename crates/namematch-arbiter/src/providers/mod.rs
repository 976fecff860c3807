mod noop;
mod prompt_arbiter;

pub use noop::NoopArbiter;
pub use prompt_arbiter::{PromptArbiter, TextCompletion};
