//! Structural merge of nested animation and configuration trees.
//!
//! Merging never mutates its inputs: the base tree (typically a shared built-in template) is
//! borrowed and a new tree is returned, so one group's overrides cannot leak into another's.

use crate::animation::style::StyleValue;
use std::collections::BTreeMap;

/// Recursive overlay merge.
///
/// `overlay` wins wherever it says something; anything it leaves unspecified falls through to
/// `self`. Maps merge per key, leaves are replaced wholesale.
pub trait DeepMerge: Clone {
    /// Return `self` with `overlay` layered on top.
    fn deep_merge(&self, overlay: &Self) -> Self;
}

impl DeepMerge for StyleValue {
    fn deep_merge(&self, overlay: &Self) -> Self {
        overlay.clone()
    }
}

impl<K, V> DeepMerge for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: DeepMerge,
{
    fn deep_merge(&self, overlay: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in overlay {
            let merged = match self.get(k) {
                Some(base) => base.deep_merge(v),
                None => v.clone(),
            };
            out.insert(k.clone(), merged);
        }
        out
    }
}

/// Merge two optional subtrees: absent on either side keeps the other.
pub(crate) fn merge_opt<T: DeepMerge>(base: &Option<T>, overlay: &Option<T>) -> Option<T> {
    match (base, overlay) {
        (Some(b), Some(o)) => Some(b.deep_merge(o)),
        (None, Some(o)) => Some(o.clone()),
        (b, None) => b.clone(),
    }
}

/// Optional leaves: a present overlay replaces, an absent one keeps the base.
pub(crate) fn pick<T: Clone>(base: &Option<T>, overlay: &Option<T>) -> Option<T> {
    overlay.clone().or_else(|| base.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/merge.rs"]
mod tests;
