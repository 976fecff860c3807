use std::fmt;

use serde::{Deserialize, Serialize};

/// Blocking key kinds, declared from most to least specific.
///
/// The derived `Ord` follows declaration order, so sorting by `KeyKind`
/// sorts by specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    Core,
    Acronym,
    Prefix3,
    Prefix2,
    First,
}

impl KeyKind {
    pub const ALL: [KeyKind; 5] = [
        KeyKind::Core,
        KeyKind::Acronym,
        KeyKind::Prefix3,
        KeyKind::Prefix2,
        KeyKind::First,
    ];

    /// 0 is the most specific.
    pub fn specificity_rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Acronym => "acronym",
            Self::Prefix3 => "prefix3",
            Self::Prefix2 => "prefix2",
            Self::First => "first",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
