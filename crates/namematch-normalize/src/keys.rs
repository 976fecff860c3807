//! Blocking keys.

use std::collections::BTreeMap;

use namematch_core::models::KeyKind;

use crate::lexicon::Lexicon;

/// Inputs needed to compute a name's blocking keys.
pub struct KeyInputs<'a> {
    pub core_tokens: &'a [String],
    pub acronym: Option<&'a str>,
    pub collision_acronym: bool,
    pub use_first_token_key: bool,
}

/// Compute blocking keys from core tokens.
///
/// - `core`: the full core key
/// - `acronym`: present and not on the collision list
/// - `prefix3` / `prefix2`: the first 3 / 2 core tokens, when that many exist
/// - `first`: the first non-stopword core token
pub fn blocking_keys(inputs: &KeyInputs<'_>, lexicon: &Lexicon) -> BTreeMap<KeyKind, String> {
    let mut keys = BTreeMap::new();
    let tokens = inputs.core_tokens;
    if tokens.is_empty() {
        return keys;
    }

    keys.insert(KeyKind::Core, tokens.join(" "));

    if let Some(acronym) = inputs.acronym {
        if !inputs.collision_acronym {
            keys.insert(KeyKind::Acronym, acronym.to_string());
        }
    }
    if tokens.len() >= 3 {
        keys.insert(KeyKind::Prefix3, tokens[..3].join(" "));
    }
    if tokens.len() >= 2 {
        keys.insert(KeyKind::Prefix2, tokens[..2].join(" "));
    }
    if inputs.use_first_token_key {
        if let Some(first) = tokens.iter().find(|t| !lexicon.is_stopword(t)) {
            keys.insert(KeyKind::First, first.clone());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn full_key_set() {
        let lex = Lexicon::builtin(&[]).unwrap();
        let tokens = toks("the acme widget works");
        let keys = blocking_keys(
            &KeyInputs {
                core_tokens: &tokens,
                acronym: Some("taww"),
                collision_acronym: false,
                use_first_token_key: true,
            },
            &lex,
        );
        assert_eq!(keys[&KeyKind::Core], "the acme widget works");
        assert_eq!(keys[&KeyKind::Acronym], "taww");
        assert_eq!(keys[&KeyKind::Prefix3], "the acme widget");
        assert_eq!(keys[&KeyKind::Prefix2], "the acme");
        assert_eq!(keys[&KeyKind::First], "acme");
    }

    #[test]
    fn collision_acronym_is_not_a_key() {
        let lex = Lexicon::builtin(&[]).unwrap();
        let tokens = toks("american broadcasting company");
        let keys = blocking_keys(
            &KeyInputs {
                core_tokens: &tokens,
                acronym: Some("abc"),
                collision_acronym: true,
                use_first_token_key: false,
            },
            &lex,
        );
        assert!(!keys.contains_key(&KeyKind::Acronym));
        assert!(!keys.contains_key(&KeyKind::First));
    }

    #[test]
    fn single_token_has_core_and_first_only() {
        let lex = Lexicon::builtin(&[]).unwrap();
        let tokens = toks("acme");
        let keys = blocking_keys(
            &KeyInputs {
                core_tokens: &tokens,
                acronym: None,
                collision_acronym: false,
                use_first_token_key: true,
            },
            &lex,
        );
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[&KeyKind::First], "acme");
    }

    #[test]
    fn empty_core_has_no_keys() {
        let lex = Lexicon::builtin(&[]).unwrap();
        let keys = blocking_keys(
            &KeyInputs {
                core_tokens: &[],
                acronym: None,
                collision_acronym: false,
                use_first_token_key: true,
            },
            &lex,
        );
        assert!(keys.is_empty());
    }
}
