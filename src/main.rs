//! ds-figures CLI entry point.

use std::io::{self, Read};
use std::process;

use clap::{Parser, Subcommand};

use ds_figures::parsers::{parse_flat, parse_nested};
use ds_figures::structures::Bst;
use ds_figures::{
    FigureConfig, FigureError, OutputFormat, draw_bst_with_config, draw_list_with_config,
    draw_tree_with_config,
};

/// Draw list, BST and tree figures as SVG + PDF.
#[derive(Parser, Debug)]
#[command(
    name = "ds-figures",
    version = env!("DS_FIGURES_VERSION"),
    about = "Draw list, BST and tree figures as SVG + PDF"
)]
struct Cli {
    #[command(subcommand)]
    kind: Kind,

    /// Directory prefix prepended verbatim to the figure name
    #[arg(short = 'd', long = "figures-dir", default_value = "../figures/", global = true)]
    figures_dir: String,

    /// Canvas width in pixels
    #[arg(short = 'w', long = "width", default_value = "600", global = true)]
    width: u32,

    /// Write only the SVG file
    #[arg(long = "svg-only", global = true)]
    svg_only: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Kind {
    /// Linked list from a flat literal, e.g. "[1, 2, 3]"
    List(Target),
    /// Binary search tree built by inserting keys in order, e.g. "[5, 3, 8]"
    Bst(Target),
    /// General tree from a nested literal, e.g. "[1, [2, []], [3, []]]"
    Tree(Target),
}

#[derive(clap::Args, Debug)]
struct Target {
    /// Structure literal (reads from stdin if not provided)
    literal: Option<String>,

    /// Output file name, without extension
    #[arg(short = 'n', long = "name")]
    name: String,
}

impl Target {
    fn literal(&self) -> io::Result<String> {
        match &self.literal {
            Some(s) => Ok(s.clone()),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn run(cli: &Cli) -> Result<(), FigureError> {
    let mut config = FigureConfig::with_figures_dir(cli.figures_dir.clone());
    config.width = cli.width;
    if cli.svg_only {
        config.formats = vec![OutputFormat::Svg];
    }

    let (target, figure) = match &cli.kind {
        Kind::List(t) => {
            let items = parse_flat(&read_literal(t)?)?;
            (t, draw_list_with_config(&items, &t.name, &config)?)
        }
        Kind::Bst(t) => {
            let keys = parse_flat(&read_literal(t)?)?;
            let tree: Bst<Key> = keys.into_iter().map(Key::from).collect();
            (t, draw_bst_with_config(&tree, &t.name, &config)?)
        }
        Kind::Tree(t) => {
            let literal = parse_nested(&read_literal(t)?)?;
            (t, draw_tree_with_config(literal, &t.name, &config)?)
        }
    };
    for path in &figure.written {
        println!("{}", path.display());
    }
    tracing::debug!(name = %target.name, height = figure.height, "done");
    Ok(())
}

fn read_literal(t: &Target) -> Result<String, FigureError> {
    t.literal().map_err(|e| FigureError::io("<stdin>", e))
}

/// BST key ordered numerically when it parses as a number, else as text.
#[derive(Debug, Clone)]
enum Key {
    Num(f64, String),
    Text(String),
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Key::Num(n, s),
            _ => Key::Text(s),
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Key::Num(a, _), Key::Num(b, _)) => a.total_cmp(b),
            (Key::Num(..), Key::Text(_)) => Ordering::Less,
            (Key::Text(_), Key::Num(..)) => Ordering::Greater,
            (Key::Text(a), Key::Text(b)) => a.cmp(b),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Num(_, s) | Key::Text(s) => f.write_str(s),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
