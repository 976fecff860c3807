//! # namematch-retrieval
//!
//! Candidate generation: an inverted blocking index built once per
//! reference list, and a retriever that unions blocking and ANN hits into
//! a capped, deterministically ordered candidate set.

pub mod blocking;
pub mod retriever;

pub use blocking::BlockingIndex;
pub use retriever::{retrieve, Retrieval};
