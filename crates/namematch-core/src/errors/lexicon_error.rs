/// Word-list loading errors. Always fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("required lexicon file missing: {path}")]
    MissingFile { path: String },

    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("malformed {path}: {reason}")]
    Malformed { path: String, reason: String },
}
