/// namematch version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of ranked candidates kept on a `MatchResult` for audit.
pub const AUDIT_TOP_CANDIDATES: usize = 5;

/// Amount subtracted from `t_high` when a score is capped below the MATCH band.
pub const CAP_BELOW_T_HIGH: f64 = 0.01;

/// Reason-code thresholds.
pub const OVERLAP_HIGH: f64 = 0.8;
pub const FUZZY_HIGH: f64 = 0.85;
pub const SEMANTIC_BOOST: f64 = 0.85;

/// Separator used when hashing an order-independent pair of core keys.
pub const PAIR_KEY_SEPARATOR: char = '\u{1f}';

/// Helper threads a capability may have alive at once, counting calls that
/// timed out but have not yet returned.
pub const MAX_IN_FLIGHT_CAPABILITY_CALLS: usize = 16;
