//! Insertion-ordered parameter registry
//!
//! A two-level store: section -> (key -> record). Order lives in the
//! `Vec`s and follows first insertion at both levels; an `AHashMap`
//! index beside each `Vec` keeps lookup O(1). The iteration order
//! drives manifest, ini, and help output as well as positional-index
//! resolution.

use ahash::AHashMap;
use tracing::debug;

use crate::record::ParamRecord;

/// One section: named, with records in declaration order.
#[derive(Debug, Default)]
pub struct Section {
    name: String,
    entries: Vec<(String, ParamRecord)>,
    index: AHashMap<String, usize>,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&ParamRecord> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ParamRecord> {
        self.index
            .get(key)
            .copied()
            .map(move |idx| &mut self.entries[idx].1)
    }

    /// Records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamRecord)> {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns every parameter record, addressed by (section, key).
#[derive(Debug, Default)]
pub struct Registry {
    sections: Vec<Section>,
    index: AHashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&idx| &self.sections[idx])
    }

    /// Look up a record. Never creates.
    pub fn lookup(&self, section: &str, key: &str) -> Option<&ParamRecord> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Mutable lookup. Never creates.
    pub fn lookup_mut(&mut self, section: &str, key: &str) -> Option<&mut ParamRecord> {
        let idx = self.index.get(section).copied()?;
        self.sections[idx].get_mut(key)
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.lookup(section, key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Install a record, replacing any existing one at (section, key).
    ///
    /// A replaced record's non-empty text value is decoded into the
    /// new record, so re-declaring with a different kind preserves the
    /// value across the kind change.
    pub fn insert_or_replace(&mut self, section: &str, key: &str, record: ParamRecord) {
        let section_idx = self.get_or_create_section(section);
        let slot = &mut self.sections[section_idx];
        if let Some(&entry_idx) = slot.index.get(key) {
            let prior = slot.entries[entry_idx].1.text();
            debug!(section, key, "replacing parameter record");
            slot.entries[entry_idx].1 = record;
            if !prior.is_empty() {
                slot.entries[entry_idx].1.set_text(&prior);
            }
        } else {
            let entry_idx = slot.entries.len();
            slot.entries.push((key.to_string(), record));
            slot.index.insert(key.to_string(), entry_idx);
        }
    }

    fn get_or_create_section(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.sections.len();
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
            index: AHashMap::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }
}
