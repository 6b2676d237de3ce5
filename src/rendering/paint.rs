//! Paint primitives for vector image descriptors: fills, gradients, patterns
//! and the drawable elements that reference them.

use std::fmt;

/// How a shape or glyph is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    None,
    /// Any CSS color understood by the rasterizer (`#d4af37`, `rgba(...)`)
    Color(String),
    /// Reference to a gradient or pattern declared in the descriptor defs
    Ref(String),
}

impl Fill {
    pub fn color(c: impl Into<String>) -> Self {
        Fill::Color(c.into())
    }

    pub fn reference(id: impl Into<String>) -> Self {
        Fill::Ref(id.into())
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::None => f.write_str("none"),
            Fill::Color(c) => f.write_str(c),
            Fill::Ref(id) => write!(f, "url(#{})", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient vector in `0.0..=1.0`
    pub offset: f32,
    pub color: String,
}

impl GradientStop {
    pub fn new(offset: f32, color: impl Into<String>) -> Self {
        Self { offset, color: color.into() }
    }
}

/// Linear gradient in bounding-box units (`0.0..=1.0` on both axes)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Top-left to bottom-right gradient
    pub fn diagonal(id: impl Into<String>, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.into(),
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            stops,
        }
    }
}

/// Tile repeated across user space (`patternUnits="userSpaceOnUse"`)
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub content: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    LinearGradient(LinearGradient),
    Pattern(Pattern),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: f32,
    pub letter_spacing: Option<f32>,
    pub anchor: TextAnchor,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Corner radius
        rx: Option<f32>,
        fill: Fill,
        opacity: Option<f32>,
    },
    Path {
        d: String,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    Text(Text),
}

impl Element {
    /// Rectangle anchored at the origin covering `width`x`height`
    pub fn backdrop(width: f32, height: f32, fill: Fill) -> Self {
        Element::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            rx: None,
            fill,
            opacity: None,
        }
    }
}
