//! Configuration for figure emission.
//!
//! The defaults reproduce the fixed values the textbook figures were drawn
//! with: a `../figures/` output directory, 600 px wide canvases, 60 px tall
//! list strips and a 10 px margin under trees.

use crate::layout::types::Point;
use crate::renderers::OutputFormat;

pub const DEFAULT_FIGURES_DIR: &str = "../figures/";

#[derive(Debug, Clone)]
pub struct FigureConfig {
    /// Prefix prepended verbatim to every figure name.
    pub figures_dir: String,
    /// Canvas width in pixels, shared by every figure kind.
    pub width: u32,
    /// Canvas height for list figures (not content-derived).
    pub list_height: u32,
    /// Added to a tree adapter's height to get the canvas height.
    pub margin: u32,
    /// Where adapters are anchored on the canvas.
    pub origin: Point,
    /// Formats written on finalization, each as `<stem>.<ext>`.
    pub formats: Vec<OutputFormat>,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            figures_dir: DEFAULT_FIGURES_DIR.to_string(),
            width: 600,
            list_height: 60,
            margin: 10,
            origin: Point::new(5.0, 5.0),
            formats: vec![OutputFormat::Svg, OutputFormat::Pdf],
        }
    }
}

impl FigureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config writing into `dir` instead of `../figures/`.
    pub fn with_figures_dir(dir: impl Into<String>) -> Self {
        Self {
            figures_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Plain concatenation of the figures directory and `name`.
    pub fn figpath(&self, name: &str) -> String {
        format!("{}{}", self.figures_dir, name)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
