//! Synopsis rendering: a plain-text man page for a module

use std::collections::BTreeMap;

use climod_params::record::ParamRecord;
use climod_params::CliModule;

fn tag<'a>(record: &'a ParamRecord, name: &str) -> &'a str {
    record.tags.get(name).map_or("", String::as_str)
}

/// Render the usage synopsis: usage line, bracketed flag summaries,
/// positional arguments by kind, a verbose per-section listing, and
/// the trailing description/contributor/acknowledgements text.
pub fn synopsis(module: &CliModule) -> String {
    let title = if module.meta.title.is_empty() {
        "app"
    } else {
        module.meta.title.as_str()
    };
    let indent = " ".repeat(title.len() + 6);

    let mut out = String::new();
    out.push_str("USAGE:\n\n");
    out.push_str(&format!("   ./{title} [-h] [--xml]\n"));
    out.push_str(&format!(
        "{indent}[--ctk-save-ini <file>] [--ctk-load-ini <file>]\n"
    ));

    // Indexed parameters are collected during the flag pass and
    // rendered in index order afterwards.
    let mut indexed: BTreeMap<usize, (&str, &ParamRecord)> = BTreeMap::new();
    for section in module.registry.sections() {
        for (_, record) in section.iter() {
            let short = tag(record, "flag");
            let long = tag(record, "longflag");
            if short.is_empty() && long.is_empty() {
                continue;
            }
            if let Some(index) = record.tags.get("index") {
                let ordinal = index.parse().unwrap_or(0);
                indexed.insert(ordinal, (tag(record, "description"), record));
                continue;
            }
            let kind = record.kind().label();
            if short.is_empty() {
                out.push_str(&format!("{indent}[--{long} <{kind}>]\n"));
            } else {
                out.push_str(&format!("{indent}[-{short} <{kind}>]\n"));
            }
        }
    }
    if !indexed.is_empty() {
        out.push_str(&indent);
        for (_, (_, record)) in &indexed {
            out.push_str(&format!("<{}> ", record.kind().label()));
        }
        out.push('\n');
    }

    // Verbose per-section listing.
    for section in module.registry.sections() {
        out.push_str(&format!("\n\n{}:\n\n", section.name()));
        for (_, record) in section.iter() {
            render_option(&mut out, record);
        }
    }

    for (ordinal, (description, record)) in &indexed {
        out.push_str(&format!("\n\n{}({ordinal}):\n", record.kind().label()));
        out.push_str(&format!("    {description}\n"));
    }

    if !module.meta.description.is_empty() {
        out.push_str(&format!("\n\n{}\n\n", module.meta.description));
    }
    if !module.meta.contributor.is_empty() {
        out.push_str(&format!("\n\nAuthor: {}\n\n", module.meta.contributor));
    }
    if !module.meta.acknowledgements.is_empty() {
        out.push_str(&format!(
            "\n\nAcknowledgements: {}\n\n",
            module.meta.acknowledgements
        ));
    }
    out
}

fn render_option(out: &mut String, record: &ParamRecord) {
    let short = tag(record, "flag");
    let long = tag(record, "longflag");
    let kind = record.kind().label();
    if !record.tags.contains_key("index") {
        if short.is_empty() && long.is_empty() {
            return;
        }
        if short.is_empty() {
            out.push_str(&format!(" [--{long} <{kind}>]\n"));
        } else if long.is_empty() {
            out.push_str(&format!(" [-{short} <{kind}>]\n"));
        } else {
            out.push_str(&format!(" [-{short}|--{long} <{kind}>]\n"));
        }
        let description = tag(record, "description");
        if !description.is_empty() {
            out.push_str(&format!("    {description}\n\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climod_params::Kind;

    fn sample_module() -> CliModule {
        let mut module = CliModule::new("demo", "Does demo things.");
        module.meta.contributor = "The Demo Authors".to_string();
        module
            .param("Basic", "Flag", Kind::Boolean)
            .declare("Toggle something", Some('b'));
        module
            .param("Special", "Slider", Kind::Double)
            .declare("Slider position", None);
        module
            .param("Special", "File", Kind::File)
            .declare_index("Input File", 0);
        module
    }

    #[test]
    fn test_usage_line_and_standard_tokens() {
        let text = synopsis(&sample_module());
        assert!(text.starts_with("USAGE:\n\n   ./demo [-h] [--xml]\n"));
        assert!(text.contains("[--ctk-save-ini <file>] [--ctk-load-ini <file>]"));
    }

    #[test]
    fn test_flag_summaries() {
        let text = synopsis(&sample_module());
        assert!(text.contains("[-b <boolean>]"));
        assert!(text.contains("[--special-slider <double>]"));
        assert!(text.contains("[-b|--basic-flag <boolean>]"));
        assert!(text.contains("Toggle something"));
    }

    #[test]
    fn test_indexed_parameters_listed_by_kind() {
        let text = synopsis(&sample_module());
        assert!(text.contains("<file>"));
        assert!(text.contains("file(0):\n    Input File"));
    }

    #[test]
    fn test_trailing_description_and_contributor() {
        let text = synopsis(&sample_module());
        assert!(text.contains("Does demo things."));
        assert!(text.contains("Author: The Demo Authors"));
    }
}
