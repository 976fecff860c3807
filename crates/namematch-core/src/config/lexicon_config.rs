use serde::{Deserialize, Serialize};

/// Where the word lists come from.
///
/// With no `dir`, the built-in lists are used. With a `dir`, the designator
/// list is required and every other file is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub dir: Option<String>,
}

/// File names inside a lexicon directory.
pub mod files {
    pub const DESIGNATORS: &str = "designators_global.txt";
    pub const ALIASES: &str = "designator_aliases.json";
    pub const SUBSTITUTIONS: &str = "replacements.json";
    pub const COLLISIONS: &str = "acronym_collision.txt";
    pub const STOPWORDS: &str = "stopwords.txt";
}
