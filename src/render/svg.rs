// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::catalog::FONT_SIZE;
use crate::instructions::BuildStep;

use super::{DiagramSink, Point, Rect};

/// Id of the arrowhead marker every step document defines.
pub const ARROWHEAD_MARKER_ID: &str = "arrowhead";

pub const BACKGROUND_FILL: &str = "lightgray";

/// An SVG document being written for one build step.
///
/// The preamble (arrowhead marker, background) is emitted on construction; drawing calls append
/// elements in call order.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    out: String,
    font_size: f64,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_font_size(width, height, FONT_SIZE)
    }

    /// Like [`SvgDocument::new`], with text drawn at `font_size` pt.
    pub fn with_font_size(width: u32, height: u32, font_size: f64) -> Self {
        let mut itoa_buf = itoa::Buffer::new();
        let mut out = String::with_capacity(512);
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" width=""#);
        out.push_str(itoa_buf.format(width));
        out.push_str(r#"" height=""#);
        out.push_str(itoa_buf.format(height));
        out.push_str("\">\n");
        let _ = writeln!(
            out,
            r#"<defs><marker id="{ARROWHEAD_MARKER_ID}" markerWidth="5" markerHeight="4" refX="0" refY="2" orient="auto"><polygon points="0 0, 5 2, 0 4"/></marker></defs>"#
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{BACKGROUND_FILL}"/>"#);
        Self { out, font_size }
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }

    fn push_num(&mut self, v: f64) {
        fmt_into(&mut self.out, v);
    }

    fn push_text_element(&mut self, at: Point, text: &str, centered: bool) {
        self.out.push_str(r#"<text x=""#);
        self.push_num(at.x);
        self.out.push_str(r#"" y=""#);
        self.push_num(at.y);
        self.out.push_str(r#"" font-size=""#);
        self.push_num(self.font_size);
        if centered {
            self.out.push_str(r#"" text-anchor="middle" dominant-baseline="middle"#);
        }
        self.out.push_str("\">");
        escape_xml_into(&mut self.out, text);
        self.out.push_str("</text>\n");
    }
}

impl DiagramSink for SvgDocument {
    fn rect(&mut self, rect: Rect, label: Option<&str>) {
        self.out.push_str(r#"<rect x=""#);
        self.push_num(rect.x);
        self.out.push_str(r#"" y=""#);
        self.push_num(rect.y);
        self.out.push_str(r#"" width=""#);
        self.push_num(rect.width);
        self.out.push_str(r#"" height=""#);
        self.push_num(rect.height);
        self.out.push_str("\" fill=\"white\" stroke=\"black\"/>\n");

        if let Some(label) = label {
            self.push_text_element(rect.center(), label, true);
        }
    }

    fn line(&mut self, from: Point, to: Point, arrow: bool) {
        self.out.push_str(r#"<line x1=""#);
        self.push_num(from.x);
        self.out.push_str(r#"" y1=""#);
        self.push_num(from.y);
        self.out.push_str(r#"" x2=""#);
        self.push_num(to.x);
        self.out.push_str(r#"" y2=""#);
        self.push_num(to.y);
        self.out.push_str("\" stroke=\"black\"");
        if arrow {
            let _ = write!(self.out, r#" marker-end="url(#{ARROWHEAD_MARKER_ID})""#);
        }
        self.out.push_str("/>\n");
    }

    fn text(&mut self, at: Point, text: &str) {
        self.push_text_element(at, text, false);
    }
}

/// Renders one step as a standalone SVG document sized exactly to the step.
pub fn render_step_svg(step: &dyn BuildStep) -> String {
    let mut doc = SvgDocument::with_font_size(step.width(), step.height(), step.font_size());
    step.render(&mut doc);
    doc.finish()
}

/// Writes `v` without float noise: near-integers print as integers and `-0` prints as `0`.
fn fmt_into(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == 0.0 {
        v = 0.0;
    }
    let _ = write!(out, "{v}");
}

fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fmt_into, render_step_svg, SvgDocument};
    use crate::instructions::BuildStep;
    use crate::render::{DiagramSink, Point, Rect};

    struct TwoBoxes;

    impl BuildStep for TwoBoxes {
        fn title(&self) -> &str {
            "two boxes"
        }

        fn width(&self) -> u32 {
            120
        }

        fn height(&self) -> u32 {
            60
        }

        fn render(&self, sink: &mut dyn DiagramSink) {
            sink.rect(Rect::new(5.0, 5.0, 50.0, 50.0), Some("M"));
            sink.rect(Rect::new(65.0, 5.0, 50.0, 50.0), Some("S"));
            sink.line(Point::new(55.0, 30.0), Point::new(65.0, 30.0), true);
        }
    }

    fn num(v: f64) -> String {
        let mut out = String::new();
        fmt_into(&mut out, v);
        out
    }

    #[test]
    fn numbers_drop_float_noise() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(9.9999999), "10");
        assert_eq!(num(f64::NAN), "0");
    }

    #[test]
    fn document_has_size_marker_and_background() {
        let svg = SvgDocument::new(300, 200).finish();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="200">"#
        ));
        assert!(svg.contains(r#"<marker id="arrowhead" markerWidth="5" markerHeight="4" refX="0" refY="2" orient="auto"><polygon points="0 0, 5 2, 0 4"/></marker>"#));
        assert!(svg.contains(r#"<rect width="100%" height="100%" fill="lightgray"/>"#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn step_content_follows_preamble() {
        let svg = render_step_svg(&TwoBoxes);
        let background = svg.find("lightgray").expect("background");
        let first_box = svg.find(r#"<rect x="5""#).expect("first box");
        assert!(background < first_box);
        assert!(svg.contains(r#"width="120" height="60">"#));
        assert!(svg.contains(
            r#"<line x1="55" y1="30" x2="65" y2="30" stroke="black" marker-end="url(#arrowhead)"/>"#
        ));
        assert!(svg.contains(r#"dominant-baseline="middle">M</text>"#));
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = SvgDocument::new(10, 10);
        doc.text(Point::new(0.0, 0.0), "a<b & \"c\"");
        let svg = doc.finish();
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;</text>"));
    }

    #[test]
    fn text_uses_document_font_size() {
        let mut doc = SvgDocument::with_font_size(10, 10, 14.5);
        doc.text(Point::new(1.0, 2.0), "x");
        let svg = doc.finish();
        assert!(svg.contains(r#"<text x="1" y="2" font-size="14.5">x</text>"#));

        let svg = render_step_svg(&TwoBoxes);
        assert!(svg.contains(r#"font-size="10""#));
    }
}
