//! # namematch-normalize
//!
//! Turns raw company names into `NormalizedName`s.
//!
//! - **Lexicon**: designators, aliases, substitutions, collision acronyms,
//!   stopwords and category word lists, built-in or loaded from a directory.
//! - **Designators**: suffix (optionally prefix) stripping with a revert rule.
//! - **Acronyms**: initialisms, acronym-shaped input, collision flags.
//! - **Keys**: blocking keys per name.
//! - **Normalizer**: the full pipeline, with a per-run moka cache.

pub mod acronyms;
pub mod cache;
pub mod categories;
pub mod designators;
pub mod keys;
pub mod lexicon;
pub mod normalizer;

pub use lexicon::Lexicon;
pub use normalizer::Normalizer;
