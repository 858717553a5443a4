//! `CliModule`: the explicit value tying registry, binder, and metadata together

use std::path::Path;

use crate::binder::FlagBinder;
use crate::declare::ParamBuilder;
use crate::errors::ParamError;
use crate::ini;
use crate::meta::AppMeta;
use crate::registry::Registry;
use crate::value::{Kind, Value};

/// One self-describing command-line module.
///
/// There is no global instance: construct a `CliModule` once and pass
/// it to the parser, the ini codec, and the manifest generator. All
/// state is single-threaded and unguarded; the module assumes exactly
/// one mutator per process lifetime.
#[derive(Debug, Default)]
pub struct CliModule {
    pub registry: Registry,
    pub binder: FlagBinder,
    pub meta: AppMeta,
}

impl CliModule {
    pub fn new(title: &str, description: &str) -> Self {
        CliModule {
            registry: Registry::new(),
            binder: FlagBinder::new(),
            meta: AppMeta::new(title, description),
        }
    }

    /// Declare a parameter and return a builder for decorating it.
    ///
    /// First declaration installs a fresh record of `kind` and binds
    /// its derived long flag. Re-declaring with the same kind is an
    /// idempotent lookup; a different kind replaces the record while
    /// preserving its non-empty text value.
    pub fn param(&mut self, section: &str, key: &str, kind: Kind) -> ParamBuilder<'_> {
        ParamBuilder::declare_in(self, section, key, kind)
    }

    /// Current value of a parameter, if declared.
    pub fn value(&self, section: &str, key: &str) -> Option<&Value> {
        self.registry.lookup(section, key).map(|r| r.value())
    }

    /// Current text form of a parameter, if declared.
    pub fn text(&self, section: &str, key: &str) -> Option<String> {
        self.registry.lookup(section, key).map(|r| r.text())
    }

    /// Coercing boolean read (see `Value::as_boolean`).
    pub fn boolean(&self, section: &str, key: &str) -> Option<bool> {
        self.value(section, key).map(Value::as_boolean)
    }

    /// Coercing integer read.
    pub fn integer(&self, section: &str, key: &str) -> Option<i64> {
        self.value(section, key).map(Value::as_integer)
    }

    /// Coercing double read.
    pub fn double(&self, section: &str, key: &str) -> Option<f64> {
        self.value(section, key).map(Value::as_double)
    }

    /// Set a parameter from text, decoding under its declared kind.
    /// A no-op for unknown parameters.
    pub fn set_text(&mut self, section: &str, key: &str, text: &str) {
        if let Some(record) = self.registry.lookup_mut(section, key) {
            record.set_text(text);
        }
    }

    /// Set a parameter value (native when the backing variant matches).
    /// A no-op for unknown parameters.
    pub fn set_value(&mut self, section: &str, key: &str, value: Value) {
        if let Some(record) = self.registry.lookup_mut(section, key) {
            record.set_value(value);
        }
    }

    /// Save all parameter values to an ini file.
    pub fn save_ini(&self, path: &Path) -> Result<(), ParamError> {
        ini::save(&self.registry, path)
    }

    /// Load parameter values from an ini file. A missing file is a
    /// recoverable error and leaves the registry unchanged.
    pub fn load_ini(&mut self, path: &Path) -> Result<(), ParamError> {
        ini::load(&mut self.registry, path)
    }
}
