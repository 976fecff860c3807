//! Word lists driving normalization.
//!
//! All lists are loaded once and are immutable for the run. Text lists are
//! one entry per line; blank lines and lines starting with `#` are ignored.
//! Maps are flat JSON objects of string to string.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use namematch_core::config::lexicon_config::files;
use namematch_core::errors::LexiconError;
use tracing::{debug, info};

const BUILTIN_DESIGNATORS: &[&str] = &[
    "ab", "ag", "as", "bhd", "bv", "co", "corp", "cv", "gmbh", "inc", "kg", "kk", "lda", "llc",
    "llp", "lp", "ltd", "ltda", "nv", "oy", "plc", "pte", "pty", "sa", "sab", "sarl", "sas",
    "sdn", "se", "spa", "srl",
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("aktiengesellschaft", "ag"),
    ("company", "co"),
    ("corporation", "corp"),
    ("gesellschaft", "gmbh"),
    ("incorporated", "inc"),
    ("limited", "ltd"),
    ("proprietary", "pty"),
];

const BUILTIN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("&", " and "),
    ("+", " and "),
    ("'", ""),
    ("\u{2019}", ""),
    ("\u{2018}", ""),
    ("`", ""),
];

const BUILTIN_COLLISIONS: &[&str] = &[
    "aaa", "abc", "ace", "amc", "bbc", "cbs", "nba", "nbc", "ups", "usa",
];

const BUILTIN_STOPWORDS: &[&str] = &[
    "a", "an", "and", "da", "de", "der", "des", "di", "die", "du", "et", "for", "la", "le", "of",
    "the", "und",
];

const BUILTIN_LOCATION: &[&str] = &[
    "america", "asia", "australia", "austria", "belgium", "brazil", "britain", "canada", "china",
    "deutschland", "europe", "france", "germany", "hongkong", "india", "ireland", "italy",
    "japan", "luxembourg", "mexico", "netherlands", "singapore", "spain", "switzerland", "uk",
];

/// Immutable set of normalization word lists.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    designators: HashSet<String>,
    aliases: HashMap<String, String>,
    /// Applied in order: longest pattern first, then lexicographic.
    substitutions: Vec<(String, String)>,
    collisions: HashSet<String>,
    stopwords: HashSet<String>,
    categories: BTreeMap<String, HashSet<String>>,
}

impl Lexicon {
    /// Built-in lists. `categories` must name built-in category lists.
    pub fn builtin(categories: &[String]) -> Result<Self, LexiconError> {
        let mut lexicon = Self {
            designators: owned_set(BUILTIN_DESIGNATORS),
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            substitutions: ordered_substitutions(
                BUILTIN_SUBSTITUTIONS
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
            collisions: owned_set(BUILTIN_COLLISIONS),
            stopwords: owned_set(BUILTIN_STOPWORDS),
            categories: BTreeMap::new(),
        };
        for category in categories {
            let words = match category.as_str() {
                "location" => owned_set(BUILTIN_LOCATION),
                other => {
                    return Err(LexiconError::MissingFile {
                        path: format!("<builtin>/{other}.txt"),
                    })
                }
            };
            lexicon.categories.insert(category.clone(), words);
        }
        Ok(lexicon)
    }

    /// Load lists from a directory. The designator list is required; every
    /// other list is optional and empty when absent. Each configured category
    /// requires `<category>.txt`.
    pub fn load_dir(dir: &Path, categories: &[String]) -> Result<Self, LexiconError> {
        let designators_path = dir.join(files::DESIGNATORS);
        if !designators_path.is_file() {
            return Err(LexiconError::MissingFile {
                path: designators_path.display().to_string(),
            });
        }

        let mut lexicon = Self {
            designators: read_word_list(&designators_path)?,
            aliases: read_optional_map(&dir.join(files::ALIASES))?
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect(),
            substitutions: ordered_substitutions(read_optional_map(&dir.join(files::SUBSTITUTIONS))?),
            collisions: read_optional_word_list(&dir.join(files::COLLISIONS))?,
            stopwords: read_optional_word_list(&dir.join(files::STOPWORDS))?,
            categories: BTreeMap::new(),
        };

        for category in categories {
            let path = dir.join(format!("{category}.txt"));
            if !path.is_file() {
                return Err(LexiconError::MissingFile {
                    path: path.display().to_string(),
                });
            }
            lexicon
                .categories
                .insert(category.clone(), read_word_list(&path)?);
        }

        info!(
            dir = %dir.display(),
            designators = lexicon.designators.len(),
            aliases = lexicon.aliases.len(),
            collisions = lexicon.collisions.len(),
            categories = lexicon.categories.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn is_designator(&self, token: &str) -> bool {
        self.designators.contains(token)
    }

    /// Canonical form of a token through the alias table.
    pub fn canonicalize<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn substitutions(&self) -> &[(String, String)] {
        &self.substitutions
    }

    pub fn is_collision(&self, acronym: &str) -> bool {
        self.collisions.contains(acronym)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// True when the token belongs to any of the loaded categories.
    pub fn in_any_category(&self, token: &str) -> bool {
        self.categories.values().any(|words| words.contains(token))
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

fn owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn ordered_substitutions(
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = pairs.into_iter().filter(|(k, _)| !k.is_empty()).collect();
    out.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    out
}

fn read_text(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|e| LexiconError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn read_word_list(path: &Path) -> Result<HashSet<String>, LexiconError> {
    let text = read_text(path)?;
    let words: HashSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    debug!(path = %path.display(), entries = words.len(), "word list read");
    Ok(words)
}

fn read_optional_word_list(path: &Path) -> Result<HashSet<String>, LexiconError> {
    if !path.is_file() {
        return Ok(HashSet::new());
    }
    read_word_list(path)
}

fn read_optional_map(path: &Path) -> Result<Vec<(String, String)>, LexiconError> {
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let text = read_text(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| LexiconError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    let object = value.as_object().ok_or_else(|| LexiconError::Malformed {
        path: path.display().to_string(),
        reason: "expected a JSON object of string to string".to_string(),
    })?;

    object
        .iter()
        .map(|(k, v)| {
            v.as_str()
                .map(|s| (k.clone(), s.to_string()))
                .ok_or_else(|| LexiconError::Malformed {
                    path: path.display().to_string(),
                    reason: format!("value for {k:?} is not a string"),
                })
        })
        .collect()
}
