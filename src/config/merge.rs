//! Shallow merge of source documents
//!
//! A later document replaces whole values for the top-level keys it names. Nested
//! mappings are not merged recursively.

use serde_yaml::Mapping;

/// Overlay `top` onto `base`. Keys absent from `top` keep their value from `base`.
pub fn merge_shallow(base: &mut Mapping, top: Mapping) {
    for (key, value) in top {
        base.insert(key, value);
    }
}
