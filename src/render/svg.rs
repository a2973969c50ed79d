//! Minimal SVG document writer.
//!
//! Accumulates elements into a string body and assembles a self-contained
//! document on `finish`. Coordinates are always formatted with two decimal
//! places so identical scenes serialize byte-identically.

use std::fmt::Write as _;

use smallvec::SmallVec;

/// Inline point buffer sized for typical polyline segments.
pub type PointBuf = SmallVec<[(f64, f64); 32]>;

#[derive(Debug)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    body: String,
    defs: String,
    clip_count: usize,
    open_clips: usize,
}

impl SvgCanvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            defs: String::new(),
            clip_count: 0,
            open_clips: 0,
        }
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}"/>"#
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{width:.2}"/>"#
        );
    }

    pub fn dashed_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
        dash: &str,
    ) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{width:.2}" stroke-dasharray="{dash}"/>"#
        );
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.len() < 2 {
            return;
        }
        let _ = write!(self.body, r#"<polyline points=""#);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            let _ = write!(self.body, "{x:.2},{y:.2}");
        }
        let _ = writeln!(
            self.body,
            r#"" fill="none" stroke="{stroke}" stroke-width="{width:.2}"/>"#
        );
    }

    pub fn polygon(&mut self, points: &[(f64, f64)], fill: &str) {
        if points.len() < 3 {
            return;
        }
        let _ = write!(self.body, r#"<polygon points=""#);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            let _ = write!(self.body, "{x:.2},{y:.2}");
        }
        let _ = writeln!(self.body, r#"" fill="{fill}"/>"#);
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}"/>"#
        );
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, fill: &str, size: f64, anchor: &str) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="{size:.2}" fill="{fill}" text-anchor="{anchor}">{}</text>"#,
            escape_text(content)
        );
    }

    /// Opens a group clipped to the given rectangle. Every element written
    /// until the matching [`SvgCanvas::pop_clip`] is confined to it.
    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let id = self.clip_count;
        self.clip_count += 1;
        self.open_clips += 1;
        let _ = writeln!(
            self.defs,
            r#"<clipPath id="clip{id}"><rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}"/></clipPath>"#
        );
        let _ = writeln!(self.body, r##"<g clip-path="url(#clip{id})">"##);
    }

    pub fn pop_clip(&mut self) {
        if self.open_clips > 0 {
            self.open_clips -= 1;
            self.body.push_str("</g>\n");
        }
    }

    /// Assembles the final document. Unbalanced clips are closed so the
    /// output is always well-formed.
    #[must_use]
    pub fn finish(mut self) -> String {
        while self.open_clips > 0 {
            self.pop_clip();
        }

        let mut doc = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = writeln!(doc, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            doc.push_str("<defs>\n");
            doc.push_str(&self.defs);
            doc.push_str("</defs>\n");
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
