//! Copy-to-clipboard payloads.
//!
//! Every copy button carries its payload in a `data-copy` attribute; the
//! script in `assets/app.js` writes it to the clipboard. These helpers build
//! the payload text.

use serde::Serialize;

/// A titled list rendered with a copy button.
#[derive(Debug, Clone)]
pub struct ListSection {
    pub title: &'static str,
    /// Bullet glyph shown before each item.
    pub marker: &'static str,
    /// Layout hint for the template: `list`, `quotes`, `chips` or `cards`.
    pub layout: &'static str,
    pub items: Vec<String>,
    pub copy_text: String,
}

impl ListSection {
    /// Section whose payload is the items joined by newlines.
    pub fn lines(title: &'static str, marker: &'static str, items: &[String]) -> Self {
        Self {
            title,
            marker,
            layout: "list",
            items: items.to_vec(),
            copy_text: join_lines(items),
        }
    }

    pub fn with_layout(mut self, layout: &'static str) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the payload with items separated by blank lines.
    pub fn paragraphs(mut self) -> Self {
        self.copy_text = join_paragraphs(&self.items);
        self
    }
}

pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

pub fn join_paragraphs(items: &[String]) -> String {
    items.join("\n\n")
}

/// `items` prefixed with their 1-based index, one per line.
pub fn enumerate_lines(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two-space indented JSON, the format copied for structured blocks.
pub fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to serialize copy payload");
        String::new()
    })
}
