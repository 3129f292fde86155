//! ds-figures: SVG + PDF figures of linked lists, binary search trees and
//! general trees.
//!
//! Public API: [`draw_list`], [`draw_bst`], [`draw_tree`] and [`figpath`].
//! Each emitter writes `../figures/<name>.svg` and `../figures/<name>.pdf`;
//! the `*_with_config` variants take a [`FigureConfig`] instead.
//!
//! ```no_run
//! use ds_figures::structures::{Bst, Nested};
//!
//! let t: Bst<i32> = [5, 3, 8].into_iter().collect();
//! ds_figures::draw_bst(&t, "bst_small")?;
//! ds_figures::draw_list(&[1, 2, 3], "list_small")?;
//! ds_figures::draw_tree(
//!     Nested::seq([
//!         Nested::Value(1),
//!         Nested::seq([Nested::Value(2)]),
//!         Nested::seq([Nested::Value(3)]),
//!     ]),
//!     "tree_small",
//! )?;
//! # Ok::<(), ds_figures::FigureError>(())
//! ```

pub mod config;
pub mod error;
pub mod figures;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod structures;
pub mod viz;

pub use config::FigureConfig;
pub use error::{FigureError, Result};
pub use figures::{
    Figure, draw_bst, draw_bst_with_config, draw_list, draw_list_with_config, draw_tree,
    draw_tree_with_config, figpath, render_figure,
};
pub use renderers::{OutputFormat, with_svg_plus_pdf};
