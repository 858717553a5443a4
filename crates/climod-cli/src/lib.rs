//! climod - command-line front end for self-describing parameter modules
//!
//! This crate exposes the argument parser and the synopsis renderer;
//! the `climod-demo` binary wires them to a representative module.

pub mod help;
pub mod parser;
