//! Drawing surface, output formats and the scoped figure canvas.
//!
//! Adapters draw onto a [`Surface`], which only records shapes. A
//! [`FigureCanvas`] owns a surface plus a path stem and, when finalized,
//! encodes the recorded shapes once per [`OutputFormat`] into
//! `<stem>.<ext>`. Finalization happens exactly once: explicitly through
//! [`FigureCanvas::finish`], or from `Drop` on any other exit path.

pub mod pdf;
pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::{FigureError, Result};
use crate::layout::types::Point;

// ─── Shapes ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    /// A line with an arrowhead at `to`.
    Arrow {
        from: Point,
        to: Point,
    },
    /// Text centred on `at`.
    Text {
        at: Point,
        text: String,
        size: f64,
    },
}

// ─── Surface ─────────────────────────────────────────────────────────────────

/// A fixed-size recording target.
#[derive(Debug, Clone)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    shapes: Vec<Shape>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn circle(&mut self, center: Point, radius: f64) {
        self.push(Shape::Circle { center, radius });
    }

    pub fn rect(&mut self, origin: Point, width: f64, height: f64) {
        self.push(Shape::Rect {
            origin,
            width,
            height,
        });
    }

    pub fn line(&mut self, from: Point, to: Point) {
        self.push(Shape::Line { from, to });
    }

    pub fn arrow(&mut self, from: Point, to: Point) {
        self.push(Shape::Arrow { from, to });
    }

    pub fn text(&mut self, at: Point, text: impl Into<String>, size: f64) {
        self.push(Shape::Text {
            at,
            text: text.into(),
            size,
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

// ─── OutputFormat ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Pdf,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    pub fn encode(self, surface: &Surface) -> Vec<u8> {
        match self {
            OutputFormat::Svg => svg::render(surface).into_bytes(),
            OutputFormat::Pdf => pdf::render(surface),
        }
    }
}

/// `<stem>.<ext>`, appended to the whole stem rather than replacing an
/// existing extension.
pub fn output_path(stem: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{stem}.{}", format.extension()))
}

// ─── FigureCanvas ────────────────────────────────────────────────────────────

/// Scoped surface that writes every configured format when finalized.
pub struct FigureCanvas {
    surface: Surface,
    stem: String,
    formats: Vec<OutputFormat>,
    finalized: bool,
}

impl FigureCanvas {
    pub fn open(
        width: u32,
        height: u32,
        stem: impl Into<String>,
        formats: &[OutputFormat],
    ) -> Self {
        let stem = stem.into();
        debug!(width, height, stem = %stem, "opening figure surface");
        Self {
            surface: Surface::new(width, height),
            stem,
            formats: formats.to_vec(),
            finalized: false,
        }
    }

    pub fn surface(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Finalize now, reporting any write error.
    pub fn finish(mut self) -> Result<Vec<PathBuf>> {
        self.finalize()
    }

    fn finalize(&mut self) -> Result<Vec<PathBuf>> {
        self.finalized = true;
        let mut written = Vec::with_capacity(self.formats.len());
        let mut first_err = None;
        // Every format is attempted even if an earlier one fails.
        for &format in &self.formats {
            let path = output_path(&self.stem, format);
            match write_format(&self.surface, format, &path) {
                Ok(()) => {
                    debug!(path = %path.display(), "wrote figure");
                    written.push(path);
                }
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }
}

impl Drop for FigureCanvas {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        if let Err(e) = self.finalize() {
            error!(stem = %self.stem, "finalizing figure failed: {e}");
        }
    }
}

fn write_format(surface: &Surface, format: OutputFormat, path: &Path) -> Result<()> {
    let bytes = format.encode(surface);
    fs::write(path, bytes).map_err(|e| FigureError::io(path, e))
}

/// Open a canvas, run `body` on its surface and always finalize.
///
/// On success the finalize result is returned. If `body` fails, the canvas
/// is still finalized (its error, if any, is only logged) and the body's
/// error is returned.
pub fn with_figure_canvas<F>(
    width: u32,
    height: u32,
    stem: &str,
    formats: &[OutputFormat],
    body: F,
) -> Result<Vec<PathBuf>>
where
    F: FnOnce(&mut Surface) -> Result<()>,
{
    let mut canvas = FigureCanvas::open(width, height, stem, formats);
    match body(canvas.surface()) {
        Ok(()) => canvas.finish(),
        Err(e) => {
            drop(canvas);
            Err(e)
        }
    }
}

/// `with_figure_canvas` writing both SVG and PDF.
pub fn with_svg_plus_pdf<F>(width: u32, height: u32, stem: &str, body: F) -> Result<Vec<PathBuf>>
where
    F: FnOnce(&mut Surface) -> Result<()>,
{
    with_figure_canvas(
        width,
        height,
        stem,
        &[OutputFormat::Svg, OutputFormat::Pdf],
        body,
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stem_in(dir: &tempfile::TempDir, name: &str) -> String {
        format!("{}/{}", dir.path().display(), name)
    }

    #[test]
    fn test_surface_records_in_order() {
        let mut s = Surface::new(100, 50);
        assert!(s.is_empty());
        s.circle(Point::new(10.0, 10.0), 5.0);
        s.text(Point::new(10.0, 10.0), "7", 12.0);
        assert_eq!(s.shapes().len(), 2);
        assert!(matches!(s.shapes()[0], Shape::Circle { .. }));
        assert!(matches!(s.shapes()[1], Shape::Text { ref text, .. } if text == "7"));
    }

    #[test]
    fn test_output_path_appends_extension() {
        assert_eq!(
            output_path("../figures/x", OutputFormat::Svg),
            PathBuf::from("../figures/x.svg")
        );
        assert_eq!(
            output_path("../figures/x.svg", OutputFormat::Pdf),
            PathBuf::from("../figures/x.svg.pdf")
        );
    }

    #[test]
    fn test_finish_writes_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let stem = stem_in(&dir, "fig");
        let mut canvas = FigureCanvas::open(40, 20, &stem, &[OutputFormat::Svg, OutputFormat::Pdf]);
        canvas.surface().line(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let written = canvas.finish().unwrap();
        assert_eq!(written.len(), 2);
        let svg = fs::read_to_string(format!("{stem}.svg")).unwrap();
        assert!(svg.contains("<line"));
        let pdf = fs::read(format!("{stem}.pdf")).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_drop_finalizes() {
        let dir = tempfile::tempdir().unwrap();
        let stem = stem_in(&dir, "dropped");
        {
            let _canvas = FigureCanvas::open(40, 20, &stem, &[OutputFormat::Svg]);
        }
        assert!(PathBuf::from(format!("{stem}.svg")).exists());
        assert!(!PathBuf::from(format!("{stem}.pdf")).exists());
    }

    #[test]
    fn test_finish_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let stem = stem_in(&dir, "no/such/dir/fig");
        let canvas = FigureCanvas::open(40, 20, &stem, &[OutputFormat::Svg]);
        let err = canvas.finish().unwrap_err();
        assert!(matches!(err, FigureError::Io { .. }));
    }

    #[test]
    fn test_body_error_still_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let stem = stem_in(&dir, "partial");
        let result = with_svg_plus_pdf(40, 20, &stem, |s| {
            s.circle(Point::new(10.0, 10.0), 5.0);
            Err(FigureError::Draw("boom".into()))
        });
        assert!(matches!(result, Err(FigureError::Draw(ref m)) if m == "boom"));
        let svg = fs::read_to_string(format!("{stem}.svg")).unwrap();
        assert!(svg.contains("<circle"));
        assert!(PathBuf::from(format!("{stem}.pdf")).exists());
    }

    #[test]
    fn test_second_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let stem = stem_in(&dir, "again");
        with_svg_plus_pdf(40, 20, &stem, |s| {
            s.circle(Point::new(10.0, 10.0), 5.0);
            Ok(())
        })
        .unwrap();
        with_svg_plus_pdf(40, 20, &stem, |_| Ok(())).unwrap();
        let svg = fs::read_to_string(format!("{stem}.svg")).unwrap();
        assert!(!svg.contains("<circle"));
    }
}
