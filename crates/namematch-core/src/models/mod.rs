mod candidate;
mod codes;
mod decision;
mod evidence;
mod keys;
mod match_result;
mod normalized_name;
mod scored_candidate;
mod verdict;

pub use candidate::{Candidate, CandidateSource};
pub use codes::{ReasonCode, WarningCode};
pub use decision::Decision;
pub use evidence::{ArbiterEvidence, EvidenceFeatures, EvidenceSide};
pub use keys::KeyKind;
pub use match_result::{MatchResult, TopCandidate};
pub use normalized_name::NormalizedName;
pub use scored_candidate::{AcronymRelation, Features, ScoredCandidate};
pub use verdict::{ArbiterDecision, ArbiterVerdict, Confidence, VerdictCacheEntry};
