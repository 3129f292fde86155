//! Figure emitters: one per data structure kind, plus the path builder.
//!
//! Every emitter follows the same sequence: wrap the structure in its
//! adapter, anchor it, open a scoped canvas sized from the adapter and draw.
//! The canvas writes `<stem>.svg` and `<stem>.pdf` on every exit path.

use std::fmt::Display;
use std::path::PathBuf;

use tracing::info;

use crate::config::{DEFAULT_FIGURES_DIR, FigureConfig};
use crate::error::Result;
use crate::renderers::with_figure_canvas;
use crate::structures::{Bst, TreeSource};
use crate::viz::{Draw, VizBst, VizList, VizTree};

/// What an emitter produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub stem: String,
    pub width: u32,
    pub height: u32,
    pub written: Vec<PathBuf>,
}

/// `"../figures/" + name`, with no validation.
pub fn figpath(name: &str) -> String {
    format!("{DEFAULT_FIGURES_DIR}{name}")
}

/// Draw any adapter onto a fresh `width` × `height` canvas at `stem`.
pub fn render_figure<D: Draw + ?Sized>(
    viz: &D,
    width: u32,
    height: u32,
    stem: &str,
    config: &FigureConfig,
) -> Result<Figure> {
    let written = with_figure_canvas(width, height, stem, &config.formats, |surface| {
        viz.draw(surface)
    })?;
    info!(stem, width, height, "figure written");
    Ok(Figure {
        stem: stem.to_string(),
        width,
        height,
        written,
    })
}

fn tree_canvas_height(adapter_height: f64, config: &FigureConfig) -> u32 {
    (adapter_height + config.margin as f64).ceil() as u32
}

// ─── BST ─────────────────────────────────────────────────────────────────────

pub fn draw_bst<K: Display>(tree: &Bst<K>, name: &str) -> Result<Figure> {
    draw_bst_with_config(tree, name, &FigureConfig::default())
}

pub fn draw_bst_with_config<K: Display>(
    tree: &Bst<K>,
    name: &str,
    config: &FigureConfig,
) -> Result<Figure> {
    let viz = VizBst::new(tree.viz_root(), config.origin);
    let height = tree_canvas_height(viz.height(), config);
    render_figure(&viz, config.width, height, &config.figpath(name), config)
}

// ─── List ────────────────────────────────────────────────────────────────────

pub fn draw_list<I>(list: I, name: &str) -> Result<Figure>
where
    I: IntoIterator,
    I::Item: Display,
{
    draw_list_with_config(list, name, &FigureConfig::default())
}

pub fn draw_list_with_config<I>(list: I, name: &str, config: &FigureConfig) -> Result<Figure>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut viz = VizList::new(list);
    viz.position = config.origin;
    render_figure(
        &viz,
        config.width,
        config.list_height,
        &config.figpath(name),
        config,
    )
}

// ─── General tree ────────────────────────────────────────────────────────────

/// Accepts a built [`Tree`](crate::structures::Tree) or a
/// [`Nested`](crate::structures::Nested) literal describing one.
pub fn draw_tree<T, S>(input: S, name: &str) -> Result<Figure>
where
    T: Display + Clone,
    S: Into<TreeSource<T>>,
{
    draw_tree_with_config(input, name, &FigureConfig::default())
}

pub fn draw_tree_with_config<T, S>(input: S, name: &str, config: &FigureConfig) -> Result<Figure>
where
    T: Display + Clone,
    S: Into<TreeSource<T>>,
{
    let tree = input.into().into_tree()?;
    let mut viz = VizTree::new(&tree);
    viz.position = config.origin;
    let height = tree_canvas_height(viz.height(), config);
    render_figure(&viz, config.width, height, &config.figpath(name), config)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;

    use super::*;
    use crate::error::FigureError;
    use crate::layout::types::Point;
    use crate::renderers::Surface;
    use crate::structures::{Nested, Tree};

    fn config_in(dir: &tempfile::TempDir) -> FigureConfig {
        FigureConfig::with_figures_dir(format!("{}/", dir.path().display()))
    }

    struct Counting {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Draw for Counting {
        fn draw(&self, surface: &mut Surface) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            surface.circle(Point::new(10.0, 10.0), 5.0);
            if self.fail {
                Err(FigureError::Draw("adapter gave up".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_figpath() {
        assert_eq!(figpath("x.svg"), "../figures/x.svg");
        assert_eq!(figpath(""), "../figures/");
        assert_eq!(figpath("a/b c"), "../figures/a/b c");
    }

    #[test]
    fn test_render_figure_draws_once() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let viz = Counting {
            calls: Cell::new(0),
            fail: false,
        };
        let fig = render_figure(&viz, 600, 60, &cfg.figpath("once"), &cfg).unwrap();
        assert_eq!(viz.calls.get(), 1);
        assert_eq!((fig.width, fig.height), (600, 60));
        assert_eq!(fig.written.len(), 2);
    }

    #[test]
    fn test_failed_draw_still_finalizes() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let viz = Counting {
            calls: Cell::new(0),
            fail: true,
        };
        let stem = cfg.figpath("broken");
        let err = render_figure(&viz, 600, 60, &stem, &cfg).unwrap_err();
        assert!(matches!(err, FigureError::Draw(_)));
        let svg = fs::read_to_string(format!("{stem}.svg")).unwrap();
        assert!(svg.contains("<circle"));
        assert!(fs::metadata(format!("{stem}.pdf")).is_ok());
    }

    #[test]
    fn test_list_fixed_size_and_position() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let fig = draw_list_with_config(&vec![4, 8, 15], "L1", &cfg).unwrap();
        assert_eq!((fig.width, fig.height), (600, 60));
        assert_eq!(fig.stem, cfg.figpath("L1"));
        let svg = fs::read_to_string(format!("{}.svg", fig.stem)).unwrap();
        assert!(svg.contains(r#"<rect x="5" y="5" width="40" height="30""#));
        assert!(svg.contains(r#"width="600" height="60""#));
    }

    #[test]
    fn test_empty_list_keeps_fixed_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let fig = draw_list_with_config(Vec::<i32>::new(), "L0", &cfg).unwrap();
        assert_eq!((fig.width, fig.height), (600, 60));
        assert_eq!(fig.written.len(), 2);
        let svg = fs::read_to_string(format!("{}.svg", fig.stem)).unwrap();
        assert!(svg.contains(r#"width="600" height="60""#));
        assert!(!svg.contains("<rect x="));
        assert!(fs::read(format!("{}.pdf", fig.stem)).unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_list_with_latin1_and_other_labels() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let fig = draw_list_with_config(["café", "λ"], "unicode", &cfg).unwrap();
        assert_eq!(fig.written.len(), 2);
        let svg = fs::read_to_string(format!("{}.svg", fig.stem)).unwrap();
        assert!(svg.contains(">café</text>"));
        assert!(svg.contains(">λ</text>"));
        let pdf = fs::read(format!("{}.pdf", fig.stem)).unwrap();
        assert!(pdf.windows(15).any(|w| w == b"WinAnsiEncoding"));
    }

    #[test]
    fn test_tree_with_non_latin_label() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let fig = draw_tree_with_config(Tree::leaf("λ"), "lambda", &cfg).unwrap();
        assert_eq!(fig.written.len(), 2);
    }

    #[test]
    fn test_sorted_keys_bst_draws() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(&dir);
        cfg.formats = vec![crate::renderers::OutputFormat::Svg];
        let t: Bst<i32> = (0..50_000).collect();
        let fig = draw_bst_with_config(&t, "deep", &cfg).unwrap();
        // 2r + 49_999 level gaps + margin
        assert_eq!(fig.height, 30 + 49_999 * 50 + 10);
        assert_eq!(fig.written.len(), 1);
    }

    #[test]
    fn test_bst_height_tracks_shape() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let bushy: Bst<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let spindly: Bst<i32> = [1, 2, 3, 4, 5].into_iter().collect();

        let a = draw_bst_with_config(&bushy, "bushy", &cfg).unwrap();
        let b = draw_bst_with_config(&spindly, "spindly", &cfg).unwrap();

        let expected = VizBst::new(bushy.viz_root(), (5.0, 5.0)).height() as u32 + 10;
        assert_eq!(a.height, expected);
        assert_eq!(a.height, 140);
        assert_eq!(b.height, 240);
        assert_eq!(a.width, 600);
        assert_eq!(b.width, 600);
    }

    #[test]
    fn test_empty_bst_margin_only() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let fig = draw_bst_with_config(&Bst::<i32>::new(), "empty", &cfg).unwrap();
        assert_eq!(fig.height, 10);
    }

    #[test]
    fn test_tree_and_literal_agree() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let built = Tree::new(1, vec![Tree::leaf(2), Tree::leaf(3)]);
        let literal = Nested::seq([
            Nested::Value(1),
            Nested::seq([Nested::Value(2), Nested::empty()]),
            Nested::seq([Nested::Value(3), Nested::empty()]),
        ]);

        let a = draw_tree_with_config(built, "t_built", &cfg).unwrap();
        let b = draw_tree_with_config(literal, "t_literal", &cfg).unwrap();
        assert_eq!((a.width, a.height), (b.width, b.height));
        assert_eq!(a.height, 90);

        let svg_a = fs::read_to_string(format!("{}.svg", a.stem)).unwrap();
        let svg_b = fs::read_to_string(format!("{}.svg", b.stem)).unwrap();
        assert_eq!(svg_a, svg_b);
    }

    #[test]
    fn test_malformed_literal_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let err = draw_tree_with_config(Nested::<i32>::empty(), "bad", &cfg).unwrap_err();
        assert!(matches!(err, FigureError::Literal(_)));
        assert!(fs::metadata(format!("{}.svg", cfg.figpath("bad"))).is_err());
    }

    #[test]
    fn test_repeat_overwrites_same_stem() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir);
        let first = draw_list_with_config(["x", "y"], "again", &cfg).unwrap();
        let second = draw_list_with_config(["z"], "again", &cfg).unwrap();
        assert_eq!(first.written, second.written);
        let svg = fs::read_to_string(format!("{}.svg", second.stem)).unwrap();
        assert!(svg.contains(">z</text>"));
        assert!(!svg.contains(">x</text>"));
    }

    #[test]
    fn test_svg_only_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(&dir);
        cfg.formats = vec![crate::renderers::OutputFormat::Svg];
        let fig = draw_list_with_config([1], "svg_only", &cfg).unwrap();
        assert_eq!(fig.written.len(), 1);
        assert!(fs::metadata(format!("{}.pdf", fig.stem)).is_err());
    }
}
