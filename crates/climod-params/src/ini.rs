//! Ini persistence for the parameter registry
//!
//! Serializes the whole registry to section/key=value text and back.
//! The format is line-oriented:
//!
//! ```text
//! [SectionName]
//!
//! key = value
//! key2 = value2
//! ```
//!
//! Lines shorter than two characters and lines starting with `#` are
//! skipped on load. A key that is not yet declared is auto-created as
//! a string-kind record; declaring it later with a concrete kind
//! migrates the value through the registry's value-preserving replace.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::ParamError;
use crate::record::ParamRecord;
use crate::registry::Registry;
use crate::value::Kind;

/// Section assumed for keys appearing before any `[section]` header.
pub const DEFAULT_SECTION: &str = "Global";

/// Serialize the registry, sections and keys in declaration order.
pub fn to_ini(registry: &Registry) -> String {
    let mut out = String::new();
    for section in registry.sections() {
        out.push_str(&format!("\n[{}]\n\n", section.name()));
        for (key, record) in section.iter() {
            out.push_str(&format!("{} = {}\n", key, record.text()));
        }
        out.push_str("\n\n");
    }
    out
}

/// Apply ini text to the registry, decoding each value under the
/// addressed record's kind.
pub fn apply_ini(registry: &mut Registry, text: &str) {
    let mut section = DEFAULT_SECTION.to_string();
    for line in text.lines() {
        if line.len() < 2 || line.starts_with('#') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[') {
            section = header.strip_suffix(']').unwrap_or(header).to_string();
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line.trim(), ""),
        };
        if registry.lookup(&section, key).is_none() {
            debug!(section, key, "auto-creating string record for undeclared ini key");
            registry.insert_or_replace(&section, key, ParamRecord::new(Kind::Text));
        }
        if let Some(record) = registry.lookup_mut(&section, key) {
            record.set_text(value);
        }
    }
}

/// Save the registry to an ini file.
pub fn save(registry: &Registry, path: &Path) -> Result<(), ParamError> {
    fs::write(path, to_ini(registry))?;
    debug!(path = %path.display(), "saved parameter values");
    Ok(())
}

/// Load parameter values from an ini file.
///
/// A missing or unreadable file is a recoverable error; the registry
/// is left unchanged.
pub fn load(registry: &mut Registry, path: &Path) -> Result<(), ParamError> {
    let content = fs::read_to_string(path)?;
    apply_ini(registry, &content);
    debug!(path = %path.display(), "loaded parameter values");
    Ok(())
}
