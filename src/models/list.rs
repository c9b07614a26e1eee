//! Named list model
//!
//! An ordered, 0-based, densely indexed sequence of typed entries. The
//! entry at position `i` always carries `index == i`; every removal
//! renumbers the tail to keep the sequence contiguous.

use super::scalar::{approximately, Scalar, ScalarType};
use crate::error::SessionResult;

/// A single typed entry in a list
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Position of this entry within its list
    pub index: usize,

    /// Type tag of the stored value
    pub kind: ScalarType,

    /// Canonical text of the value
    pub content: String,
}

impl ListEntry {
    /// Typed view of the stored value
    pub fn value(&self) -> SessionResult<Scalar> {
        Scalar::from_content(self.kind, &self.content)
    }

    /// Exact match against a typed value
    fn matches_exactly(&self, value: &Scalar) -> bool {
        match value {
            Scalar::Str(s) => self.kind == ScalarType::String && &self.content == s,
            Scalar::Int(i) => {
                self.kind == ScalarType::Int && self.content.parse::<i32>().ok() == Some(*i)
            }
            Scalar::Float(f) => {
                self.kind == ScalarType::Float && self.content.parse::<f32>().ok() == Some(*f)
            }
        }
    }

    /// Lookup match: floats compare approximately
    fn matches_for_lookup(&self, value: &Scalar) -> bool {
        match value {
            Scalar::Float(f) => {
                self.kind == ScalarType::Float
                    && self
                        .content
                        .parse::<f32>()
                        .map(|stored| approximately(stored, *f))
                        .unwrap_or(false)
            }
            other => self.matches_exactly(other),
        }
    }
}

/// A named, ordered list of typed entries
#[derive(Debug, Clone, PartialEq)]
pub struct SessionList {
    /// Unique list name
    pub name: String,

    entries: Vec<ListEntry>,
}

impl SessionList {
    /// Create an empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Entries in order
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a typed value, returning its index
    pub fn push(&mut self, value: &Scalar) -> usize {
        self.push_content(value.scalar_type(), value.to_content())
    }

    /// Append already-canonical text with its type tag
    pub(crate) fn push_content(&mut self, kind: ScalarType, content: String) -> usize {
        let index = self.entries.len();
        self.entries.push(ListEntry {
            index,
            kind,
            content,
        });
        index
    }

    /// Find the entry whose index is `index`
    ///
    /// The index is a content key; under the contiguity invariant it
    /// coincides with the position.
    pub fn entry(&self, index: usize) -> Option<&ListEntry> {
        self.entries.iter().find(|e| e.index == index)
    }

    /// Remove the entry at `index` and renumber the tail
    ///
    /// Returns `None` (and leaves the list untouched) when `index` is out
    /// of range.
    pub fn remove_at(&mut self, index: usize) -> Option<ListEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Remove entries whose type and value match exactly
    ///
    /// Stops after the first match unless `remove_all` is set. Returns the
    /// number of entries removed.
    pub fn remove_matching(&mut self, value: &Scalar, remove_all: bool) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].matches_exactly(value) {
                self.entries.remove(i);
                removed += 1;
                if !remove_all {
                    break;
                }
            } else {
                i += 1;
            }
        }
        self.renumber();
        removed
    }

    /// First position whose type and value match
    ///
    /// Float values compare approximately here, unlike removal.
    pub fn position_of(&self, value: &Scalar) -> Option<usize> {
        self.entries.iter().position(|e| e.matches_for_lookup(value))
    }

    /// Whether indices run `0..len` with no gaps or duplicates
    pub fn is_contiguous(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, e)| e.index == i)
    }

    fn renumber(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.index = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scores() -> SessionList {
        let mut list = SessionList::new("Scores");
        list.push(&Scalar::Int(10));
        list.push(&Scalar::Int(20));
        list.push(&Scalar::Int(10));
        list
    }

    #[test]
    fn test_push_assigns_contiguous_indices() {
        let list = scores();
        assert_eq!(list.len(), 3);
        assert!(list.is_contiguous());
        assert_eq!(list.entry(1).unwrap().content, "20");
    }

    #[test]
    fn test_remove_at_renumbers() {
        let mut list = scores();
        let removed = list.remove_at(0).unwrap();
        assert_eq!(removed.content, "10");
        assert_eq!(list.entry(0).unwrap().content, "20");
        assert_eq!(list.entry(1).unwrap().content, "10");
        assert!(list.entry(2).is_none());
        assert!(list.is_contiguous());
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut list = scores();
        assert!(list.remove_at(999).is_none());
        assert_eq!(list, scores());
    }

    #[test]
    fn test_remove_matching_first_only() {
        let mut list = scores();
        assert_eq!(list.remove_matching(&Scalar::Int(10), false), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.entry(0).unwrap().content, "20");
        assert!(list.is_contiguous());
    }

    #[test]
    fn test_remove_matching_all() {
        let mut list = scores();
        assert_eq!(list.remove_matching(&Scalar::Int(10), true), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.entry(0).unwrap().content, "20");
    }

    #[test]
    fn test_remove_matching_respects_type() {
        let mut list = scores();
        assert_eq!(list.remove_matching(&Scalar::from("10"), true), 0);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_float_lookup_is_approximate_but_removal_is_exact() {
        let mut list = SessionList::new("Floats");
        list.push(&Scalar::Float(0.3));

        assert_eq!(list.position_of(&Scalar::Float(0.31)), None);

        // one ulp away
        let near = f32::from_bits(0.3_f32.to_bits() + 1);
        assert_eq!(list.position_of(&Scalar::Float(near)), Some(0));
        assert_eq!(list.remove_matching(&Scalar::Float(near), true), 0);
        assert_eq!(list.remove_matching(&Scalar::Float(0.3), true), 1);
    }

    #[test]
    fn test_position_of_missing() {
        let list = scores();
        assert_eq!(list.position_of(&Scalar::Int(30)), None);
        assert_eq!(list.position_of(&Scalar::Int(20)), Some(1));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i32),
        RemoveAt(usize),
        RemoveValue(i32, bool),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..5i32).prop_map(Op::Add),
            (0..8usize).prop_map(Op::RemoveAt),
            (0..5i32, any::<bool>()).prop_map(|(v, all)| Op::RemoveValue(v, all)),
        ]
    }

    proptest! {
        #[test]
        fn indices_stay_contiguous(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut list = SessionList::new("L");
            for op in ops {
                match op {
                    Op::Add(v) => { list.push(&Scalar::Int(v)); }
                    Op::RemoveAt(i) => { list.remove_at(i); }
                    Op::RemoveValue(v, all) => { list.remove_matching(&Scalar::Int(v), all); }
                }
                prop_assert!(list.is_contiguous());
            }
        }
    }
}
