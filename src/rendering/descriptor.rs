//! In-memory vector image descriptor and its SVG serialization.
//!
//! A descriptor is built once, serialized to SVG markup, handed to the
//! rasterizer and dropped.

use std::fmt::Write;

use super::paint::{Definition, Element, Fill, LinearGradient, Pattern, Stroke, Text};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    /// Target pixel width
    pub width: u32,
    /// Target pixel height
    pub height: u32,
    pub defs: Vec<Definition>,
    pub elements: Vec<Element>,
}

impl ImageDescriptor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn with_gradient(mut self, gradient: LinearGradient) -> Self {
        self.defs.push(Definition::LinearGradient(gradient));
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.defs.push(Definition::Pattern(pattern));
        self
    }

    pub fn with(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Whether a `url(#id)` reference resolves to a declared definition
    pub fn defines(&self, id: &str) -> bool {
        self.defs.iter().any(|d| match d {
            Definition::LinearGradient(g) => g.id == id,
            Definition::Pattern(p) => p.id == id,
        })
    }

    /// Serialize to standalone SVG markup
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );

        if !self.defs.is_empty() {
            out.push_str("  <defs>\n");
            for def in &self.defs {
                match def {
                    Definition::LinearGradient(g) => write_gradient(&mut out, g),
                    Definition::Pattern(p) => write_pattern(&mut out, p),
                }
            }
            out.push_str("  </defs>\n");
        }

        for el in &self.elements {
            write_element(&mut out, el, 1);
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_gradient(out: &mut String, g: &LinearGradient) {
    let _ = writeln!(
        out,
        r#"    <linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
        escape(&g.id),
        g.x1 * 100.0,
        g.y1 * 100.0,
        g.x2 * 100.0,
        g.y2 * 100.0
    );
    for stop in &g.stops {
        let _ = writeln!(
            out,
            r#"      <stop offset="{}%" stop-color="{}"/>"#,
            stop.offset * 100.0,
            escape(&stop.color)
        );
    }
    out.push_str("    </linearGradient>\n");
}

fn write_pattern(out: &mut String, p: &Pattern) {
    let _ = writeln!(
        out,
        r#"    <pattern id="{}" width="{}" height="{}" patternUnits="userSpaceOnUse">"#,
        escape(&p.id),
        p.width,
        p.height
    );
    for el in &p.content {
        write_element(out, el, 3);
    }
    out.push_str("    </pattern>\n");
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    match el {
        Element::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"{indent}<rect x="{x}" y="{y}" width="{width}" height="{height}""#
            );
            if let Some(rx) = rx {
                let _ = write!(out, r#" rx="{rx}""#);
            }
            write_fill(out, fill);
            if let Some(o) = opacity {
                let _ = write!(out, r#" opacity="{o}""#);
            }
            out.push_str("/>\n");
        }
        Element::Path { d, fill, stroke } => {
            let _ = write!(out, r#"{indent}<path d="{}""#, escape(d));
            write_fill(out, fill);
            if let Some(Stroke { color, width }) = stroke {
                let _ = write!(
                    out,
                    r#" stroke="{}" stroke-width="{width}""#,
                    escape(color)
                );
            }
            out.push_str("/>\n");
        }
        Element::Text(t) => write_text(out, t, &indent),
    }
}

fn write_text(out: &mut String, t: &Text, indent: &str) {
    let _ = write!(
        out,
        r#"{indent}<text x="{}" y="{}" text-anchor="{}""#,
        t.x,
        t.y,
        t.anchor.as_str()
    );
    write_fill(out, &t.fill);
    let _ = write!(
        out,
        r#" font-family="{}" font-weight="{}" font-size="{}""#,
        escape(&t.font_family),
        t.font_weight,
        t.font_size
    );
    if let Some(ls) = t.letter_spacing {
        let _ = write!(out, r#" letter-spacing="{ls}""#);
    }
    let _ = writeln!(out, ">{}</text>", escape(&t.content));
}

fn write_fill(out: &mut String, fill: &Fill) {
    let _ = write!(out, r#" fill="{}""#, escape(&fill.to_string()));
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
