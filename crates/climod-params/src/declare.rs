//! Declaration builder for parameters and their decorations
//!
//! Declaration goes through `CliModule::param`, which returns a
//! short-lived builder borrowing the module. The builder stores no
//! value itself; every call writes straight through to the record in
//! the registry and to the flag binder.

use crate::module::CliModule;
use crate::record::ParamRecord;
use crate::value::{Kind, Value};

/// Derive the long-flag name from a (section, key) pair:
/// lower-cased, spaces replaced by hyphens, joined by a hyphen.
pub fn normalized_name(section: &str, key: &str) -> String {
    format!("{section}-{key}").to_lowercase().replace(' ', "-")
}

/// Chained declaration handle for one parameter.
pub struct ParamBuilder<'a> {
    module: &'a mut CliModule,
    section: String,
    key: String,
}

impl<'a> ParamBuilder<'a> {
    pub(crate) fn declare_in(
        module: &'a mut CliModule,
        section: &str,
        key: &str,
        kind: Kind,
    ) -> Self {
        let installed_kind = module.registry.lookup(section, key).map(ParamRecord::kind);
        if installed_kind != Some(kind) {
            // Fresh declaration, or a kind change going through the
            // value-preserving replace.
            module
                .registry
                .insert_or_replace(section, key, ParamRecord::new(kind));
            let name = normalized_name(section, key);
            module.binder.bind(&format!("--{name}"), section, key);
            if let Some(record) = module.registry.lookup_mut(section, key) {
                record.tags.insert("longflag".to_string(), name);
            }
        }
        ParamBuilder {
            module,
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    fn record_mut(&mut self) -> Option<&mut ParamRecord> {
        self.module.registry.lookup_mut(&self.section, &self.key)
    }

    /// Describe the parameter and optionally bind an additional short
    /// flag. The long flag is already bound from declaration.
    pub fn declare(mut self, description: &str, short: Option<char>) -> Self {
        if let Some(c) = short {
            self.module
                .binder
                .bind(&format!("-{c}"), &self.section, &self.key);
        }
        if let Some(record) = self.record_mut() {
            record
                .tags
                .insert("description".to_string(), description.to_string());
            if let Some(c) = short {
                record.tags.insert("flag".to_string(), c.to_string());
            }
        }
        self
    }

    /// Bind the parameter to a positional index instead of a flag.
    ///
    /// The stringified index becomes the binder token. The long-flag
    /// name recorded at declaration moves into the `flag` tag as an
    /// alias; the long-flag binding itself stays usable.
    pub fn declare_index(mut self, description: &str, index: usize) -> Self {
        self.module
            .binder
            .bind(&index.to_string(), &self.section, &self.key);
        if let Some(record) = self.record_mut() {
            if let Some(long) = record.tags.remove("longflag") {
                record.tags.insert("flag".to_string(), long);
            }
            record.tags.insert("index".to_string(), index.to_string());
            record
                .tags
                .insert("description".to_string(), description.to_string());
        }
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.tag_entry("description", text);
        self
    }

    pub fn label(mut self, text: &str) -> Self {
        self.tag_entry("label", text);
        self
    }

    /// Mark the parameter as an input or output channel.
    pub fn channel(mut self, input: bool) -> Self {
        self.tag_entry("channel", if input { "input" } else { "output" });
        self
    }

    /// Free-form tag, rendered as a child element in the manifest.
    pub fn tag(mut self, name: &str, value: &str) -> Self {
        self.tag_entry(name, value);
        self
    }

    /// Free-form attribute, rendered on the kind element itself.
    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        if let Some(record) = self.record_mut() {
            record
                .attributes
                .insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Free-form constraint, rendered in the grouped constraints child.
    pub fn constraint(mut self, name: &str, value: &str) -> Self {
        if let Some(record) = self.record_mut() {
            record
                .constraints
                .insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Loadable file extensions, for file/image/geometry kinds.
    pub fn file_extensions(self, extensions: &str) -> Self {
        self.attribute("fileExtensions", extensions)
    }

    /// Media type attribute, for image/geometry kinds.
    pub fn media_type(self, media_type: &str) -> Self {
        self.attribute("type", media_type)
    }

    /// Coordinate system attribute, for point/region kinds.
    pub fn coordinate_system(self, system: &str) -> Self {
        self.attribute("coordinateSystem", system)
    }

    /// Multiple-values attribute, for point/region kinds.
    pub fn multiple(self, multiple: bool) -> Self {
        self.attribute("multiple", if multiple { "true" } else { "false" })
    }

    /// Comma-separated choice list; expands to an element list in the
    /// manifest.
    pub fn enumeration(self, choices: &str) -> Self {
        self.tag("enumeration", choices)
    }

    /// Slider range for double kinds: minimum/maximum/step constraints.
    pub fn range(self, minimum: f64, maximum: f64, step: f64) -> Self {
        self.constraint("minimum", &Value::Double(minimum).encode())
            .constraint("maximum", &Value::Double(maximum).encode())
            .constraint("step", &Value::Double(step).encode())
    }

    /// Seed the current (default) value.
    pub fn set(mut self, value: Value) -> Self {
        if let Some(record) = self.record_mut() {
            record.set_value(value);
        }
        self
    }

    /// Seed the current value from text.
    pub fn set_text(mut self, text: &str) -> Self {
        if let Some(record) = self.record_mut() {
            record.set_text(text);
        }
        self
    }

    fn tag_entry(&mut self, name: &str, value: &str) {
        if let Some(record) = self.record_mut() {
            record.tags.insert(name.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name() {
        assert_eq!(normalized_name("Basic Types", "Bool Param"), "basic-types-bool-param");
        assert_eq!(normalized_name("S", "K"), "s-k");
    }

    #[test]
    fn test_declaration_binds_long_flag() {
        let mut module = CliModule::new("app", "test app");
        module.param("Basic", "Flag", Kind::Boolean);

        assert_eq!(module.binder.resolve("--basic-flag"), Some(("Basic", "Flag")));
        assert!(module
            .registry
            .lookup("Basic", "Flag")
            .is_some_and(|r| r.tags.get("longflag").map(String::as_str) == Some("basic-flag")));
    }

    #[test]
    fn test_redeclaring_same_kind_is_idempotent() {
        let mut module = CliModule::new("app", "test app");
        module
            .param("S", "K", Kind::Integer)
            .set(Value::Integer(7));
        module.param("S", "K", Kind::Integer);

        assert_eq!(module.integer("S", "K"), Some(7));
        assert_eq!(module.registry.sections().len(), 1);
        assert_eq!(module.registry.sections()[0].len(), 1);
    }

    #[test]
    fn test_redeclaring_different_kind_migrates_value() {
        let mut module = CliModule::new("app", "test app");
        module.param("S", "K", Kind::Text).set_text("0.333");
        module.param("S", "K", Kind::Double);

        assert_eq!(module.double("S", "K"), Some(0.333));
        assert!(module
            .registry
            .lookup("S", "K")
            .is_some_and(|r| r.kind() == Kind::Double));
    }

    #[test]
    fn test_short_flag_binding() {
        let mut module = CliModule::new("app", "test app");
        module
            .param("Basic", "Flag", Kind::Boolean)
            .declare("Just a test", Some('b'));

        assert_eq!(module.binder.resolve("-b"), Some(("Basic", "Flag")));
        assert!(module
            .registry
            .lookup("Basic", "Flag")
            .is_some_and(|r| r.tags.get("flag").map(String::as_str) == Some("b")));
    }

    #[test]
    fn test_index_declaration_moves_longflag_to_alias() {
        let mut module = CliModule::new("app", "test app");
        module
            .param("Special", "File", Kind::File)
            .declare_index("Input File", 0);

        assert_eq!(module.binder.resolve("0"), Some(("Special", "File")));
        // the long flag stays bound as an alias
        assert_eq!(module.binder.resolve("--special-file"), Some(("Special", "File")));
        let record = module.registry.lookup("Special", "File");
        assert!(record.is_some_and(|r| r.tags.get("index").map(String::as_str) == Some("0")));
        assert!(record.is_some_and(|r| r.tags.get("flag").map(String::as_str) == Some("special-file")));
        assert!(record.is_some_and(|r| !r.tags.contains_key("longflag")));
    }

    #[test]
    fn test_range_sets_constraints() {
        let mut module = CliModule::new("app", "test app");
        module
            .param("Special", "Slider", Kind::Double)
            .range(0.0, 1.0, 0.01);

        let record = module.registry.lookup("Special", "Slider");
        assert!(record.is_some_and(|r| r.constraints.get("minimum").map(String::as_str) == Some("0")));
        assert!(record.is_some_and(|r| r.constraints.get("maximum").map(String::as_str) == Some("1")));
        assert!(record.is_some_and(|r| r.constraints.get("step").map(String::as_str) == Some("0.01")));
    }

    #[test]
    fn test_specialized_decorations() {
        let mut module = CliModule::new("app", "test app");
        module
            .param("Special", "File", Kind::File)
            .file_extensions("bli,bla,blbub")
            .channel(true);

        let record = module.registry.lookup("Special", "File");
        assert!(record.is_some_and(
            |r| r.attributes.get("fileExtensions").map(String::as_str) == Some("bli,bla,blbub")
        ));
        assert!(record
            .is_some_and(|r| r.tags.get("channel").map(String::as_str) == Some("input")));
    }
}
