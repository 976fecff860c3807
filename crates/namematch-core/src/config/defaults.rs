// Single source of truth for all default values.

// --- Normalization ---
pub const DEFAULT_STRIP_PREFIX_DESIGNATORS: bool = false;
pub const DEFAULT_FOLD_DIACRITICS: bool = true;
pub const DEFAULT_COLLAPSE_SINGLE_LETTERS: bool = true;
pub const DEFAULT_NORMALIZATION_CACHE_SIZE: u64 = 50_000;
pub const DEFAULT_MAX_CATEGORY_PASSES: usize = 10;

// --- Acronyms ---
pub const DEFAULT_ACRONYM_MIN_LENGTH: usize = 3;

// --- Candidates ---
pub const DEFAULT_MAX_CANDIDATES_TOTAL: usize = 500;
pub const DEFAULT_MAX_CANDIDATES_LEXICAL: usize = 300;
pub const DEFAULT_MAX_CANDIDATES_ANN: usize = 200;
pub const DEFAULT_USE_FIRST_TOKEN_KEY: bool = true;

// --- Scoring weights ---
pub const DEFAULT_WEIGHT_TOKEN_OVERLAP: f64 = 0.35;
pub const DEFAULT_WEIGHT_FUZZY: f64 = 0.30;
pub const DEFAULT_WEIGHT_ACRONYM: f64 = 0.20;
pub const DEFAULT_WEIGHT_SEMANTIC: f64 = 0.15;

// --- Acronym signal ---
pub const DEFAULT_ACRONYM_STRONG_SIGNAL: f64 = 1.0;
pub const DEFAULT_ACRONYM_COLLISION_SIGNAL: f64 = 0.3;

// --- Penalties ---
pub const DEFAULT_NUMERIC_MISMATCH_PENALTY: f64 = 0.30;
pub const DEFAULT_NUMERIC_ONE_SIDE_PENALTY: f64 = 0.10;
pub const DEFAULT_SHORT_NAME_PENALTY: f64 = 0.15;
pub const DEFAULT_LEXICAL_FLOOR: f64 = 0.5;

// --- Decision thresholds ---
pub const DEFAULT_T_HIGH: f64 = 0.92;
pub const DEFAULT_T_LOW: f64 = 0.75;
pub const DEFAULT_MARGIN: f64 = 0.06;

// --- Arbiter ---
pub const DEFAULT_ARBITER_ENABLED: bool = true;
pub const DEFAULT_ARBITER_TOP_K: usize = 3;
pub const DEFAULT_ARBITER_GLOBAL_CALL_CAP: usize = 50;
pub const DEFAULT_ARBITER_MIN_CONFIDENCE: f64 = 0.75;
pub const DEFAULT_ARBITER_TIMEOUT_MS: u64 = 10_000;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_ENABLED: bool = true;
pub const DEFAULT_ANN_NEIGHBORS: usize = 100;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 250;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 100_000;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 30_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
