//! Point-label interning.
//!
//! Symbolic coordinate variables refer to points by label. Labels are
//! interned once per construction protocol so that variables carry a small
//! `Copy` id whose ordering is deterministic (first-seen order) and whose
//! mapping back to the label is exact.

use std::fmt;

use hashbrown::HashMap;

/// Interned identifier of a point label.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(u32);

impl LabelId {
    /// Creates an id from its raw index.
    ///
    /// Ids are normally handed out by a [`LabelInterner`]; this exists for
    /// tests and for tables indexed by id.
    #[must_use]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({})", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A bijective label table.
///
/// Interning the same label twice returns the same id; distinct labels
/// always receive distinct ids.
#[derive(Debug, Clone, Default)]
pub struct LabelInterner {
    ids: HashMap<String, LabelId>,
    labels: Vec<String>,
}

impl LabelInterner {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a label, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` labels are interned.
    pub fn intern(&mut self, label: &str) -> LabelId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }

        let index = u32::try_from(self.labels.len()).expect("label table capacity exceeded");
        let id = LabelId(index);
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Looks up the id of a label without interning it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<LabelId> {
        self.ids.get(label).copied()
    }

    /// Returns the label of an id.
    #[must_use]
    pub fn resolve(&self, id: LabelId) -> Option<&str> {
        self.labels.get(id.0 as usize).map(String::as_str)
    }

    /// Returns the label of an id, or its `#n` form when unknown.
    #[must_use]
    pub fn display(&self, id: LabelId) -> String {
        self.resolve(id)
            .map_or_else(|| id.to_string(), ToString::to_string)
    }

    /// Returns the number of interned labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over `(id, label)` pairs in interning order.
    pub fn iter(&self) -> impl Iterator<Item = (LabelId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (LabelId(i as u32), label.as_str()))
    }
}
