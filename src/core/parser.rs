use crate::domain::model::ConfigRecord;
use crate::utils::error::{ConfigError, Result};

/// Value used for any field whose tag is missing or empty.
pub const PLACEHOLDER: &str = "No disponible";

const TAG_PDA: &str = "PDA";
const TAG_MANAGER: &str = "Gestor";
const TAG_CENTER: &str = "CENTRO";
const TAG_SIG: &str = "SIG";

/// Parses the configuration XML. Missing tags fall back to [`PLACEHOLDER`]
/// independently; a document that is not well-formed XML is an error.
pub fn parse(text: &str) -> Result<ConfigRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options).map_err(|e| {
        tracing::error!("Failed to parse configuration XML: {}", e);
        ConfigError::ParseFailed(e.to_string())
    })?;

    let record = ConfigRecord {
        pda: field(&doc, TAG_PDA),
        manager: field(&doc, TAG_MANAGER),
        center: field(&doc, TAG_CENTER),
        sig: field(&doc, TAG_SIG),
    };
    tracing::debug!("Parsed configuration: {:?}", record);
    Ok(record)
}

// First element with the tag anywhere in the document, text of all its descendants.
fn field(doc: &roxmltree::Document, tag: &str) -> String {
    let text: String = doc
        .descendants()
        .find(|node| node.has_tag_name(tag))
        .map(|node| {
            node.descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        tracing::warn!("Tag <{}> missing or empty, using placeholder", tag);
        PLACEHOLDER.to_string()
    } else {
        text
    }
}
