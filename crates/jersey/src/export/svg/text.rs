//! Text labels printed on the jersey.

use svg::{
    Node,
    node::{Blob, element::Element},
};

use jersey_core::color::HexColor;

/// Escape text for use as XML character data.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A centered label at a fixed position, bold unless stated otherwise.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    content: &'a str,
    x: f32,
    y: f32,
    size: u32,
    weight: &'static str,
    letter_spacing: Option<u32>,
}

impl<'a> Label<'a> {
    pub fn new(content: &'a str, x: f32, y: f32, size: u32) -> Self {
        Self {
            content,
            x,
            y,
            size,
            weight: "bold",
            letter_spacing: None,
        }
    }

    pub fn with_weight(mut self, weight: &'static str) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_letter_spacing(mut self, spacing: u32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Build the `<text>` element, or `None` when there is nothing to print.
    pub fn render(&self, font: &str, fill: HexColor) -> Option<Element> {
        if self.content.is_empty() {
            return None;
        }

        let mut text = Element::new("text");
        text.assign("x", self.x);
        text.assign("y", self.y);
        text.assign("text-anchor", "middle");
        text.assign("font-weight", self.weight);
        text.assign("font-family", font);
        text.assign("font-size", self.size);
        text.assign("fill", fill.to_string());
        if let Some(spacing) = self.letter_spacing {
            text.assign("letter-spacing", spacing);
        }
        text.append(Blob::new(escape_xml(self.content)));

        Some(text)
    }
}
