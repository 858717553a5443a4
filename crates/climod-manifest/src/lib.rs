//! climod-manifest - XML manifest generation
//!
//! Renders a module's metadata and parameter registry into the
//! fixed-schema XML document consumed by host tooling to auto-generate
//! parameter GUIs. Rendering is read-only: nothing here mutates the
//! registry.

use climod_params::record::ParamRecord;
use climod_params::CliModule;
use tracing::debug;

/// Render the full manifest document.
///
/// Metadata fields come first in schema order (non-empty only), then
/// one `<parameters>` block per section in registry order. Each record
/// renders as an element named by its kind label, carrying its
/// attributes, a `<name>`/`<default>` pair, one child per non-empty
/// tag (with `enumeration` expanded into an element list), and an
/// optional grouped `<constraints>` child.
pub fn render(module: &CliModule) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str("<executable>\n");

    for (name, value) in module.meta.manifest_fields() {
        if !value.is_empty() {
            xml.push_str(&format!("  <{name}>{}</{name}>\n", escape(value)));
        }
    }

    for section in module.registry.sections() {
        xml.push_str("  <parameters>\n");
        xml.push_str(&format!("    <label>{}</label>\n", escape(section.name())));
        xml.push_str(&format!(
            "    <description>{} - Section</description>\n",
            escape(section.name())
        ));
        for (key, record) in section.iter() {
            render_record(&mut xml, key, record);
        }
        xml.push_str("  </parameters>\n");
    }

    xml.push_str("</executable>\n");
    debug!(sections = module.registry.sections().len(), "rendered manifest");
    xml
}

fn render_record(xml: &mut String, key: &str, record: &ParamRecord) {
    let kind = record.kind().label();

    xml.push_str(&format!("    <{kind}"));
    for (name, value) in &record.attributes {
        if !value.is_empty() {
            xml.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }
    }
    xml.push_str(">\n");

    xml.push_str(&format!("      <name>{}</name>\n", escape(key)));
    xml.push_str(&format!("      <default>{}</default>\n", escape(&record.text())));

    for (name, value) in &record.tags {
        if value.is_empty() {
            continue;
        }
        if name == "enumeration" {
            xml.push_str("      <enumeration>\n");
            for element in value.split(',').filter(|e| !e.is_empty()) {
                xml.push_str(&format!("        <element>{}</element>\n", escape(element)));
            }
            xml.push_str("      </enumeration>\n");
        } else {
            xml.push_str(&format!("      <{name}>{}</{name}>\n", escape(value)));
        }
    }

    if !record.constraints.is_empty() {
        xml.push_str("      <constraints>\n");
        for (name, value) in &record.constraints {
            xml.push_str(&format!("        <{name}>{}</{name}>\n", escape(value)));
        }
        xml.push_str("      </constraints>\n");
    }

    xml.push_str(&format!("    </{kind}>\n"));
}

/// Minimal XML escaping for text content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
