//! Data model for placed text elements.
//!
//! A canvas is an ordered list of `Element`s. Each element carries its
//! text, the `Style` frozen into it at creation time, and a `Position`
//! that only drag gestures may change. Insertion order is z-order.

use crate::error::StyleError;
use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Font size ───────────────────────────────────────────────────────────

/// A font size in pixels, restricted to the sizes the toolbar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FontSize(u16);

impl FontSize {
    /// Every selectable size, in toolbar order.
    pub const ALL: [FontSize; 10] = [
        FontSize(8),
        FontSize(10),
        FontSize(12),
        FontSize(14),
        FontSize(16),
        FontSize(18),
        FontSize(20),
        FontSize(24),
        FontSize(30),
        FontSize(36),
    ];

    pub const fn px(self) -> u16 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize(16)
    }
}

impl TryFrom<u32> for FontSize {
    type Error = StyleError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        FontSize::ALL
            .into_iter()
            .find(|size| u32::from(size.0) == px)
            .ok_or(StyleError::UnsupportedFontSize(px))
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> u32 {
        u32::from(size.0)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// ─── Font family ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    #[serde(rename = "Courier New")]
    CourierNew,
    Georgia,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::CourierNew,
        FontFamily::Georgia,
        FontFamily::TimesNewRoman,
        FontFamily::Verdana,
    ];

    /// The family name as CSS and the toolbar spell it.
    pub const fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Verdana => "Verdana",
        }
    }

    /// Whether every glyph has the same advance width.
    pub const fn is_monospace(self) -> bool {
        matches!(self, FontFamily::CourierNew)
    }
}

impl FromStr for FontFamily {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| StyleError::UnsupportedFontFamily(s.to_string()))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Alignment ───────────────────────────────────────────────────────────

/// Horizontal alignment of lines within a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub const fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(StyleError::UnsupportedAlignment(other.to_string())),
        }
    }
}

// ─── Style ───────────────────────────────────────────────────────────────

/// Text styling frozen into an element at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub alignment: Alignment,
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Offset of an element's top-left corner from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Element ─────────────────────────────────────────────────────────────

/// A placed, styled text item.
///
/// Text and style are read-only once constructed; only the store can
/// move an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    text: String,
    style: Style,
    pub(crate) position: Position,
}

impl Element {
    pub fn new(id: ElementId, text: impl Into<String>, style: Style, position: Position) -> Self {
        Self {
            id,
            text: text.into(),
            style,
            position,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The text to draw: the element's own text, or `placeholder` when empty.
    pub fn display_text<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.text.is_empty() {
            placeholder
        } else {
            &self.text
        }
    }
}
