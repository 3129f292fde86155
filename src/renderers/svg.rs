//! SVG encoder: turns a recorded surface into an SVG document string.

use super::{Shape, Surface};
use crate::layout::types::Point;

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

const FILL_STROKE: &str = r#"fill="white" stroke="black" stroke-width="1.5""#;
const LINE_STROKE: &str = r#"stroke="black" stroke-width="1.5""#;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: f64) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{}""#, num(size))
}

/// Format a coordinate without a trailing `.0` for whole numbers.
fn num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

fn pt(p: Point) -> (String, String) {
    (num(p.x), num(p.y))
}

// ── Shape rendering ───────────────────────────────────────────────────────────

fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Circle { center, radius } => {
            let (cx, cy) = pt(*center);
            let r = num(*radius);
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" {FILL_STROKE}/>"#)
        }
        Shape::Rect {
            origin,
            width,
            height,
        } => {
            let (x, y) = pt(*origin);
            let (w, h) = (num(*width), num(*height));
            format!(r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" {FILL_STROKE}/>"#)
        }
        Shape::Line { from, to } => {
            let (x1, y1) = pt(*from);
            let (x2, y2) = pt(*to);
            format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" {LINE_STROKE}/>"#)
        }
        Shape::Arrow { from, to } => {
            let (x1, y1) = pt(*from);
            let (x2, y2) = pt(*to);
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" {LINE_STROKE} marker-end="url(#arrowhead)"/>"#
            )
        }
        Shape::Text { at, text, size } => {
            let (x, y) = pt(*at);
            let f = font(*size);
            format!(
                r#"<text x="{x}" y="{y}" dominant-baseline="central" text-anchor="middle" {f}>{}</text>"#,
                escape(text)
            )
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Render every recorded shape, in recording order, to an SVG document.
pub fn render(surface: &Surface) -> String {
    let (w, h) = (surface.width, surface.height);
    let mut parts = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        "<defs>".to_string(),
        r#"  <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto">"#.to_string(),
        r#"    <polygon points="0 0, 10 3.5, 0 7" fill="black"/>"#.to_string(),
        "  </marker>".to_string(),
        "</defs>".to_string(),
        format!(r#"<rect width="{w}" height="{h}" fill="white"/>"#),
    ];
    parts.extend(surface.shapes().iter().map(render_shape));
    parts.push("</svg>".to_string());
    let mut out = parts.join("\n");
    out.push('\n');
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
