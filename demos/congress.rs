//! Grow a decision tree on a congressional voting record
//! and print it.
//!
//! ```text
//! cargo run --example congress -- congress_small.csv --depth 5
//! ```
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use minitree::prelude::*;

#[derive(Parser)]
#[command(about = "Grow a decision tree from a CSV voting record")]
struct Args {
    /// CSV file whose first row is the header.
    file: PathBuf,

    /// Attribute to predict.
    #[arg(long, default_value = "class")]
    target: String,

    /// Attributes to split on, in tie-breaking order.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "vote4,vote5,vote6,vote7",
    )]
    features: Vec<String>,

    /// Maximal depth of the tree.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,

    /// JSON file overriding the default vocabulary.
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Also write the tree in Graphviz format.
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let dataset = DatasetReader::default()
        .file(&args.file)
        .read()?;

    let vocabulary = match &args.vocabulary {
        Some(path) => Vocabulary::from_json(std::fs::read_to_string(path)?)?,
        None => Vocabulary::default(),
    };

    println!("{}\n{}", "VOCABULARY".bold().green(), vocabulary.to_json()?);

    let tree = DecisionTreeBuilder::new(&dataset)
        .target(&args.target)
        .features(&args.features)
        .max_depth(args.depth)
        .vocabulary(vocabulary)
        .build()?;
    println!("{tree}");

    let f = tree.induce();
    println!("{}", "TREE".bold().green());
    print!("{f}");

    let (n_examples, _) = dataset.shape();
    match tree.accuracy(&f, dataset.examples()) {
        Ok(acc) => println!(
            "{} {:.3} ({n_examples} examples, depth {}, {} leaves)",
            "TRAIN ACC.".bold().cyan(),
            acc,
            f.depth(),
            f.n_leaves(),
        ),
        Err(err) => println!("{} {err}", "TRAIN ACC.".bold().yellow()),
    }

    if let Some(path) = &args.dot {
        f.to_dot_file(path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        },
    }
}
