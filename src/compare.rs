//! Key-set comparison between the developer config and the sample config

use crate::domain::KeySet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyComparison {
    /// Both files have exactly the same top-level keys.
    pub equal: bool,
    /// Developer keys the sample does not carry. This is the only direction reported.
    pub missing: KeySet,
    /// Sample keys the developer file does not carry. Diagnostic only.
    pub unused: KeySet,
}

/// Compare the developer key set against the sample key set.
///
/// `equal` is plain set equality; `missing` is `developer - sample`.
pub fn compare(developer: &KeySet, sample: &KeySet) -> KeyComparison {
    let equal = developer == sample;
    let missing = developer.difference(sample).cloned().collect();
    let unused = sample.difference(developer).cloned().collect();

    KeyComparison { equal, missing, unused }
}
