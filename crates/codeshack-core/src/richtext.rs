//! Rich-text documents stored in question content and solutions
//!
//! The backend stores the editor's raw block document as a JSON string. The
//! client never renders styles; it only needs to build documents from plain
//! text, ship them, and recover their plain text for listings.

use crate::error::CodeShackResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block type for a plain paragraph
pub const UNSTYLED: &str = "unstyled";

/// Raw block document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextDocument {
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub entity_map: Map<String, Value>,
}

/// One paragraph-level block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default = "unstyled")]
    pub block_type: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<Value>,
    #[serde(default)]
    pub entity_ranges: Vec<Value>,
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Fields this client does not interpret, kept so documents round-trip
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unstyled() -> String {
    UNSTYLED.to_string()
}

impl Block {
    /// A plain paragraph with a fresh key
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            key: new_block_key(),
            text: text.into(),
            block_type: unstyled(),
            depth: 0,
            inline_style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
            data: Map::new(),
            extra: Map::new(),
        }
    }
}

impl RichTextDocument {
    /// One unstyled block per input line
    pub fn from_plain_text(text: &str) -> Self {
        let blocks = if text.is_empty() {
            vec![Block::paragraph("")]
        } else {
            text.lines().map(Block::paragraph).collect()
        };
        Self {
            blocks,
            entity_map: Map::new(),
        }
    }

    /// Accept either a serialized document or plain text
    pub fn from_text_or_json(input: &str) -> Self {
        Self::from_transport(input).unwrap_or_else(|_| Self::from_plain_text(input))
    }

    /// Parse the serialized form stored by the backend
    pub fn from_transport(raw: &str) -> CodeShackResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize for a request body
    pub fn to_transport(&self) -> CodeShackResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Block texts joined by newlines
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.blocks.iter().all(|block| block.text.trim().is_empty())
    }
}

/// Plain text of a stored document, or the raw string if it is not one
pub fn describe(raw: &str) -> String {
    match RichTextDocument::from_transport(raw) {
        Ok(doc) => doc.plain_text(),
        Err(_) => raw.to_string(),
    }
}

fn new_block_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..5].to_string()
}
