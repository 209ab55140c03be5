use super::cache::DescriptorCache;
use crate::core::chem::descriptors::DescriptorSet;
use crate::core::seq::normalize::clean_sequence;
use crate::core::seq::record::SequenceRecord;

/// Owns the per-session shared state: the working collection and the
/// descriptor cache keyed by cleaned sequence.
///
/// There are no ambient globals — every pipeline invocation receives its
/// context explicitly, so isolated instances can run side by side (tests,
/// parallel sessions). Loading a new collection resets the cache.
#[derive(Debug, Default)]
pub struct SessionContext {
    collection: Vec<SequenceRecord>,
    cache: DescriptorCache,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SequenceRecord>) -> Self {
        Self {
            collection: records,
            cache: DescriptorCache::new(),
        }
    }

    /// Replaces the working collection and drops all cached scores.
    pub fn load(&mut self, records: Vec<SequenceRecord>) {
        self.collection = records;
        self.cache.clear();
    }

    pub fn collection(&self) -> &[SequenceRecord] {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    /// Synchronous cached scoring entry point. The sequence is normalized
    /// before the cache lookup, so raw and cleaned spellings of the same
    /// sequence share one entry.
    pub fn descriptors_for(&mut self, sequence: &str) -> DescriptorSet {
        let clean = clean_sequence(sequence);
        self.cache.get_or_compute(&clean)
    }

    /// Splits the context into the record slice and the cache, letting batch
    /// tasks score records while iterating the collection.
    pub(crate) fn parts(&mut self) -> (&[SequenceRecord], &mut DescriptorCache) {
        (&self.collection, &mut self.cache)
    }
}
