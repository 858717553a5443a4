//! climod-params - typed parameter store for self-describing
//! command-line modules
//!
//! A program declares typed parameters addressed by a (section, key)
//! pair, binds them to command-line flags or positional indices, and
//! persists their values to ini text. Three surfaces share one store:
//! the command-line parser and the ini codec mutate record values
//! through the text codec; the manifest generator only reads.

pub mod binder;
pub mod declare;
pub mod errors;
pub mod ini;
pub mod meta;
pub mod module;
pub mod record;
pub mod registry;
pub mod value;

pub use module::CliModule;
pub use value::{Kind, Value};
