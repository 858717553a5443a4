//! Parameter record: one typed value plus its decorations

use std::collections::BTreeMap;
use std::mem;

use crate::value::{Kind, Value};

/// Value-holding unit owned by the registry, one per (section, key).
///
/// The kind is fixed at creation; only the registry's replace operation
/// changes a record's kind, by installing a new record and migrating
/// the old text value into it. Decorations are open string maps:
/// `tags` become child elements in the manifest, `attributes` become
/// element attributes, and `constraints` render as a grouped child.
#[derive(Debug, Clone)]
pub struct ParamRecord {
    kind: Kind,
    value: Value,
    pub tags: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub constraints: BTreeMap<String, String>,
}

impl ParamRecord {
    /// Create a record of the given kind holding its zero value.
    pub fn new(kind: Kind) -> Self {
        ParamRecord {
            kind,
            value: kind.default_value(),
            tags: BTreeMap::new(),
            attributes: BTreeMap::new(),
            constraints: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Current value in canonical text form.
    pub fn text(&self) -> String {
        self.value.encode()
    }

    /// Decode `text` under this record's kind and store the result.
    pub fn set_text(&mut self, text: &str) {
        self.value = self.kind.decode(text);
    }

    /// Store a value. A value of the record's own backing variant is
    /// stored natively; anything else goes through the text codec.
    pub fn set_value(&mut self, value: Value) {
        if mem::discriminant(&self.value) == mem::discriminant(&value) {
            self.value = value;
        } else {
            self.set_text(&value.encode());
        }
    }
}
