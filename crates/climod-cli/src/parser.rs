//! Command-line parsing against a module's flag binder
//!
//! The parser scans a mutable argument list left to right, mutating
//! matched records in place and compacting handled slots out at the
//! end. Unmatched tokens stay in the list for downstream consumers.
//! Diagnostics go to standard error as they occur and are also
//! collected in the returned outcome; nothing here terminates the
//! process.

use std::path::Path;

use climod_params::record::ParamRecord;
use climod_params::{ini, CliModule, Kind};
use tracing::debug;

use crate::help;

/// What a parse run did: diagnostics emitted and slots consumed.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub diagnostics: Vec<String>,
    pub handled: usize,
}

/// Parse `args` against the module, assigning matched values.
///
/// Handled slots are removed from `args` in place, preserving the
/// relative order of whatever remains. Positional bindings match by
/// ordinal position among the non-flag tokens actually supplied, not
/// by declared index value.
pub fn parse_command_line(module: &mut CliModule, args: &mut Vec<String>) -> ParseOutcome {
    let mut handled = vec![false; args.len()];
    let mut diagnostics = Vec::new();
    let diag = |message: String, diagnostics: &mut Vec<String>| {
        eprintln!("{message}");
        diagnostics.push(message);
    };

    let mut positional = 0usize;
    let mut i = 0;
    while i < args.len() {
        let cmd = args[i].clone();

        // Manifest and help tokens bypass the registry entirely.
        if cmd == "--xml" {
            print!("{}", climod_manifest::render(module));
            handled[i] = true;
            i += 1;
            continue;
        }
        if cmd == "--help" || cmd == "-h" {
            print!("{}", help::synopsis(module));
            handled[i] = true;
            i += 1;
            continue;
        }

        if cmd == "--ctk-save-ini" || cmd == "--ctk-load-ini" {
            if i + 1 == args.len() {
                diag(
                    format!(
                        "Expected value but found end of argument list. Ignored command line argument {cmd}"
                    ),
                    &mut diagnostics,
                );
                break;
            }
            handled[i] = true;
            handled[i + 1] = true;
            let path = args[i + 1].clone();
            let result = if cmd == "--ctk-save-ini" {
                ini::save(&module.registry, Path::new(&path))
            } else {
                ini::load(&mut module.registry, Path::new(&path))
            };
            if let Err(e) = result {
                diag(
                    format!("Could not process ini file '{path}': {e}"),
                    &mut diagnostics,
                );
            }
            i += 2;
            continue;
        }

        let is_flag = cmd.starts_with('-');
        let token = if is_flag {
            cmd.clone()
        } else {
            // Non-flag tokens are matched by ordinal position: the
            // counter advances whether or not this ordinal is bound.
            let token = positional.to_string();
            positional += 1;
            token
        };

        let resolved = module
            .binder
            .resolve(&token)
            .map(|(section, key)| (section.to_string(), key.to_string()));
        let Some((section, key)) = resolved else {
            if is_flag {
                diag(
                    format!("Ignored command line argument {cmd}"),
                    &mut diagnostics,
                );
            }
            i += 1;
            continue;
        };

        let Some(kind) = module
            .registry
            .lookup(&section, &key)
            .map(ParamRecord::kind)
        else {
            i += 1;
            continue;
        };

        if kind == Kind::Boolean {
            // Boolean flags toggle and never consume a value slot.
            let current = module.boolean(&section, &key).unwrap_or(false);
            module.set_text(&section, &key, if current { "false" } else { "true" });
            handled[i] = true;
            i += 1;
            continue;
        }

        if is_flag {
            if i + 1 == args.len() {
                diag(
                    format!(
                        "Expected value but found end of argument list. Ignored command line argument {cmd}"
                    ),
                    &mut diagnostics,
                );
                break;
            }
            let text = args[i + 1].clone();
            module.set_text(&section, &key, &text);
            handled[i] = true;
            handled[i + 1] = true;
            i += 2;
        } else {
            // A bound positional token is itself the value.
            let text = args[i].clone();
            module.set_text(&section, &key, &text);
            handled[i] = true;
            i += 1;
        }
    }

    // Compact handled slots out, preserving relative order.
    let mut idx = 0;
    args.retain(|_| {
        let keep = !handled[idx];
        idx += 1;
        keep
    });

    let handled_count = handled.iter().filter(|&&h| h).count();
    debug!(
        handled = handled_count,
        remaining = args.len(),
        "command line parsed"
    );
    ParseOutcome {
        diagnostics,
        handled: handled_count,
    }
}
