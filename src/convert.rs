//! Top-level HTML fragment → JSX conversion.
//!
//! Parsing, the script-content check, and the root-cardinality decision
//! live here; the per-node emission is in [`crate::serialize`].

use std::fmt;

use markup5ever_rcdom::{Handle, NodeData};
use serde::{Deserialize, Serialize};

use crate::dom::{has_script_descendant, parse_into_container};
use crate::serialize::{JsxSerializer, DEFAULT_INDENT};

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS AND ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Constructor-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Per-level indentation unit for the emitted JSX.
    pub indent: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

/// Errors surfaced by [`HtmlToJsx::convert`].
#[derive(Debug, Clone, Serialize)]
pub enum ConvertError {
    /// The input contains a `<script>` element. Scripts cannot be carried
    /// into JSX, so the whole conversion fails with no partial output.
    UnsupportedContent { reason: String },
    /// The external HTML parser failed to consume the input.
    Parse { message: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedContent { reason } => {
                write!(f, "unsupported content: {}", reason)
            }
            Self::Parse { message } => write!(f, "failed to parse HTML: {}", message),
        }
    }
}

impl std::error::Error for ConvertError {}

// ═══════════════════════════════════════════════════════════════════════════════
// CONVERTER
// ═══════════════════════════════════════════════════════════════════════════════

/// HTML fragment to JSX source converter.
pub struct HtmlToJsx {
    serializer: JsxSerializer,
}

impl HtmlToJsx {
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            serializer: JsxSerializer::new(options.indent),
        }
    }

    /// Convert an HTML fragment into a JSX source string.
    ///
    /// A fragment with a single root element converts to a bare
    /// `<Tag>...</Tag>` string that can drop straight into a component's
    /// return expression; anything else is wrapped in a `<div>` so the
    /// result stays one JSX expression.
    pub fn convert(&self, html: &str) -> Result<String, ConvertError> {
        if html.is_empty() {
            return Ok(String::new());
        }

        let padded = format!("\n{}\n", html);
        let container = parse_into_container(&padded).map_err(|e| ConvertError::Parse {
            message: e.to_string(),
        })?;

        if has_script_descendant(&container) {
            return Err(ConvertError::UnsupportedContent {
                reason: "script tags are not permitted".to_string(),
            });
        }

        if has_single_root_element(&container) {
            let mut output = String::new();
            for child in container.children.borrow().iter() {
                output.push_str(&self.serializer.serialize(child, 0));
            }
            Ok(output)
        } else {
            Ok(self.serializer.serialize(&container, 0))
        }
    }
}

impl Default for HtmlToJsx {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert with default options.
pub fn convert(html: &str) -> Result<String, ConvertError> {
    HtmlToJsx::new().convert(html)
}

/// True when the container holds exactly one element and nothing else that
/// would render. A second element, non-blank text, or any comment forces
/// the wrapper; whitespace-only text never does.
fn has_single_root_element(container: &Handle) -> bool {
    let children = container.children.borrow();
    if children.len() == 1 {
        return matches!(children[0].data, NodeData::Element { .. });
    }

    let mut seen_element = false;
    for child in children.iter() {
        match &child.data {
            NodeData::Element { .. } => {
                if seen_element {
                    return false;
                }
                seen_element = true;
            }
            NodeData::Text { contents } => {
                if !contents.borrow().trim().is_empty() {
                    return false;
                }
            }
            NodeData::Comment { .. } => {
                return false;
            }
            _ => {}
        }
    }
    seen_element
}
