//! Plain text reference for the output parameters
//!
//! The reference has two sections, standard parameters first and extra parameters
//! second. Each section is a heading, an underline and one line per parameter,
//! sorted by identifier:
//!
//! ```text
//!     Output parameters
//!     -------
//!     q_res   : heat loss by respiration [W]
//!
//!
//!     Extra output parameters
//!     -------
//!     age     : age [years]
//! ```
//!
//! Rendering is a pure function of the registry and the [DocsConfig]; rendering the
//! same inputs twice gives byte-identical output.

use super::catalogue::ALL_OUT_PARAMS;
use super::config::{DocsConfig, DEFAULT_DOCS};
use super::descriptor::{OutputSet, ParameterDescriptor};
use super::registry::ParameterRegistry;

pub const STANDARD_HEADING: &str = "Output parameters";
pub const EXTRA_HEADING: &str = "Extra output parameters";

/// Reference text for the built-in catalogue, using the default layout
pub fn show_outparam_docs() -> String {
    render_docs(&ALL_OUT_PARAMS, &DEFAULT_DOCS)
}

/// Render the reference text for `registry`
pub fn render_docs(registry: &ParameterRegistry, config: &DocsConfig) -> String {
    tracing::debug!(parameters = registry.len(), "rendering output parameter docs");

    let standard = render_section(STANDARD_HEADING, registry, OutputSet::Standard, config);
    let extra = render_section(EXTRA_HEADING, registry, OutputSet::Extra, config);
    let docs = format!("{standard}\n{extra}");

    indent(docs.trim(), &config.indent)
}

/// One parameter line: `<identifier padded to key_width>: <meaning> [<unit>]`
pub fn format_entry_line(descriptor: &ParameterDescriptor, key_width: usize) -> String {
    format!(
        "{:<width$}: {} [{}]",
        descriptor.identifier,
        descriptor.meaning,
        descriptor.unit,
        width = key_width
    )
}

fn render_section(
    heading: &str,
    registry: &ParameterRegistry,
    set: OutputSet,
    config: &DocsConfig,
) -> String {
    let mut section = format!("\n{heading}\n{}\n", config.underline);
    for descriptor in registry.in_set(set) {
        section.push_str(&format_entry_line(descriptor, config.key_width));
        section.push('\n');
    }
    section
}

/// Prefix every non-blank line; blank lines are kept empty
fn indent(text: &str, prefix: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            // Unicode White_Space only; the ASCII separators \x1c-\x1f count as content.
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}
