//! PDF encoder: one page, 1 px = 1 pt, written with `pdf-writer`.
//!
//! Surface coordinates have their origin at the top-left with y growing
//! downwards; PDF user space grows upwards, so every y is flipped against
//! the page height.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use super::{Shape, Surface};
use crate::layout::types::Point;

const FONT_NAME: Name<'static> = Name(b"F1");
/// Byte written for characters the font encoding has no glyph for.
const MISSING_GLYPH: u8 = b'?';

const LINE_WIDTH: f32 = 1.5;
const ARROW_LEN: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 3.5;
/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f64 = 0.552_284_75;
/// Average Helvetica glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.55;

struct Page {
    height: f64,
}

impl Page {
    fn x(&self, p: Point) -> f32 {
        p.x as f32
    }

    fn y(&self, p: Point) -> f32 {
        (self.height - p.y) as f32
    }
}

/// Transcode a label to WinAnsiEncoding bytes.
///
/// ASCII and Latin-1 map to themselves; the common punctuation WinAnsi
/// keeps in 0x80..0x9F is mapped explicitly. Anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '™' => 0x99,
            _ => MISSING_GLYPH,
        })
        .collect()
}

fn draw_shape(page: &Page, content: &mut Content, shape: &Shape) {
    match shape {
        Shape::Circle { center, radius } => {
            let (cx, cy, r) = (center.x, center.y, *radius);
            let k = r * KAPPA;
            let at = |dx: f64, dy: f64| {
                let p = Point::new(cx + dx, cy + dy);
                (page.x(p), page.y(p))
            };
            let (x0, y0) = at(r, 0.0);
            content.move_to(x0, y0);
            for [(c1x, c1y), (c2x, c2y), (ex, ey)] in [
                [(r, k), (k, r), (0.0, r)],
                [(-k, r), (-r, k), (-r, 0.0)],
                [(-r, -k), (-k, -r), (0.0, -r)],
                [(k, -r), (r, -k), (r, 0.0)],
            ] {
                let (ax, ay) = at(c1x, c1y);
                let (bx, by) = at(c2x, c2y);
                let (px, py) = at(ex, ey);
                content.cubic_to(ax, ay, bx, by, px, py);
            }
            content.close_path();
            content.fill_nonzero_and_stroke();
        }
        Shape::Rect {
            origin,
            width,
            height,
        } => {
            let bottom_left = origin.offset(0.0, *height);
            content.rect(
                page.x(bottom_left),
                page.y(bottom_left),
                *width as f32,
                *height as f32,
            );
            content.fill_nonzero_and_stroke();
        }
        Shape::Line { from, to } => {
            content.move_to(page.x(*from), page.y(*from));
            content.line_to(page.x(*to), page.y(*to));
            content.stroke();
        }
        Shape::Arrow { from, to } => {
            content.move_to(page.x(*from), page.y(*from));
            content.line_to(page.x(*to), page.y(*to));
            content.stroke();
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let (ux, uy) = (dx / len, dy / len);
                let base = to.offset(-ux * ARROW_LEN, -uy * ARROW_LEN);
                let left = base.offset(-uy * ARROW_HALF_WIDTH, ux * ARROW_HALF_WIDTH);
                let right = base.offset(uy * ARROW_HALF_WIDTH, -ux * ARROW_HALF_WIDTH);
                content.save_state();
                content.set_fill_gray(0.0);
                content.move_to(page.x(*to), page.y(*to));
                content.line_to(page.x(left), page.y(left));
                content.line_to(page.x(right), page.y(right));
                content.close_path();
                content.fill_nonzero();
                content.restore_state();
            }
        }
        Shape::Text { at, text, size } => {
            let bytes = win_ansi(text);
            if bytes.contains(&MISSING_GLYPH) && !text.contains('?') {
                tracing::warn!(label = %text, "glyphs outside WinAnsiEncoding drawn as '?'");
            }
            let width = bytes.len() as f64 * size * GLYPH_ADVANCE;
            // Baseline sits about a third of the size below the visual centre.
            let origin = at.offset(-width / 2.0, size * 0.35);
            content.save_state();
            content.set_fill_gray(0.0);
            content.begin_text();
            content.set_font(FONT_NAME, *size as f32);
            content.next_line(page.x(origin), page.y(origin));
            content.show(Str(&bytes));
            content.end_text();
            content.restore_state();
        }
    }
}

/// Encode the surface as a single-page PDF document.
pub fn render(surface: &Surface) -> Vec<u8> {
    let (w, h) = (surface.width as f32, surface.height as f32);
    let page = Page {
        height: surface.height as f64,
    };

    let mut content = Content::new();
    content.set_line_width(LINE_WIDTH);
    content.set_stroke_gray(0.0);
    content.set_fill_gray(1.0);
    content.rect(0.0, 0.0, w, h);
    content.fill_nonzero();
    for shape in surface.shapes() {
        draw_shape(&page, &mut content, shape);
    }

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);
    let mut pg = pdf.page(page_id);
    pg.media_box(Rect::new(0.0, 0.0, w, h));
    pg.parent(page_tree_id);
    pg.contents(content_id);
    pg.resources().fonts().pair(FONT_NAME, font_id);
    pg.finish();
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.stream(content_id, &content.finish());
    pdf.finish()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
