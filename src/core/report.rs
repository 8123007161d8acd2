use crate::core::{Customer, Event};
use crate::domain::model::{Digest, DigestLine, DigestSection, Distance, Pass};
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;

pub const SECTION_SEPARATOR: &str = "----";

/// Builds one digest line. `distance` is whatever value ranked the event;
/// it is never recomputed here.
pub fn digest_line(
    customer: &Customer,
    event: &Event,
    distance: Option<Distance>,
    price: Option<u32>,
) -> DigestLine {
    DigestLine {
        customer: customer.name.clone(),
        event: event.name.clone(),
        city: event.city.clone(),
        distance,
        price,
    }
}

pub fn render_text(digest: &Digest) -> String {
    let mut out = String::new();
    for (i, section) in digest.sections.iter().enumerate() {
        if i > 0 {
            out.push_str(SECTION_SEPARATOR);
            out.push('\n');
        }
        for line in &section.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
    }
    out
}

pub fn render_json(digest: &Digest) -> Result<String> {
    Ok(serde_json::to_string_pretty(digest)?)
}

pub fn render(digest: &Digest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(digest)),
        OutputFormat::Json => render_json(digest),
    }
}

pub fn section(pass: Pass, lines: Vec<DigestLine>) -> DigestSection {
    tracing::debug!("Pass '{}' produced {} lines", pass.label(), lines.len());
    DigestSection { pass, lines }
}
