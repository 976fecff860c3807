use namematch_core::models::NormalizedName;
use namematch_embeddings::AnnIndex;
use namematch_retrieval::BlockingIndex;

/// A loaded reference list. Immutable once built and safe to share across
/// threads; positions are the order the entries were supplied in.
pub struct ReferenceIndex {
    pub(crate) ids: Vec<String>,
    pub(crate) names: Vec<NormalizedName>,
    pub(crate) blocking: BlockingIndex,
    pub(crate) ann: Option<AnnIndex>,
}

impl ReferenceIndex {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, ref_idx: usize) -> Option<&str> {
        self.ids.get(ref_idx).map(String::as_str)
    }

    /// Original name of the reference at `ref_idx`.
    pub fn name(&self, ref_idx: usize) -> Option<&str> {
        self.names.get(ref_idx).map(|n| n.original.as_str())
    }

    pub fn normalized(&self, ref_idx: usize) -> Option<&NormalizedName> {
        self.names.get(ref_idx)
    }

    pub fn blocking(&self) -> &BlockingIndex {
        &self.blocking
    }

    /// The embedding index, when references were embedded.
    pub fn ann(&self) -> Option<&AnnIndex> {
        self.ann.as_ref()
    }
}
