use crate::core::chem::descriptors::DescriptorSet;
use std::collections::HashMap;

/// Memoizes descriptor sets per distinct cleaned sequence.
///
/// Keys are exact strings: callers must pass normalized sequences, or two
/// records sharing a sequence will miss each other's entry. The map is
/// unbounded and never evicted — the working collection is fixed per session
/// and every distinct sequence is scored at most once. Mutation is not
/// synchronized; a multi-threaded host must add its own locking.
#[derive(Debug, Default, Clone)]
pub struct DescriptorCache {
    data: HashMap<String, DescriptorSet>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, clean_sequence: &str) -> DescriptorSet {
        if let Some(set) = self.data.get(clean_sequence) {
            return *set;
        }
        let set = DescriptorSet::compute_clean(clean_sequence);
        self.data.insert(clean_sequence.to_string(), set);
        set
    }

    pub fn get(&self, clean_sequence: &str) -> Option<&DescriptorSet> {
        self.data.get(clean_sequence)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
