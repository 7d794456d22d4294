//! Surface Command Line Tools
//!
//! Inspect and transform triangular surface files and their annotations
//! without writing a program first.
//!
//! # Commands
//!
//! - `surface annotation-labels <ANNOTATION>` - List the colortable labels
//!   of an annotation file
//! - `surface unite --output <OUTPUT> <INPUT>...` - Merge surface files
//!   into a single one
//!
//! Run `surface --help` for the full option list.

mod labels;
mod unite;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Tools for triangular surface files
#[derive(Parser)]
#[command(name = "surface")]
#[command(about = "Inspect and transform triangular surface files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the colortable labels of an annotation file
    AnnotationLabels {
        /// The annotation file to read (e.g., "lh.aparc.annot")
        annotation_path: PathBuf,

        /// Column separator for the printed table
        #[arg(long, default_value = "\t")]
        delimiter: String,
    },

    /// Merge several surface files into a single one
    Unite {
        /// Where to write the united surface
        #[arg(long, value_name = "FILE")]
        output: PathBuf,

        /// The surface files to merge, in order
        #[arg(required = true)]
        input_paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::AnnotationLabels {
            annotation_path,
            delimiter,
        } => labels::run(&annotation_path, &delimiter),
        Commands::Unite {
            output,
            input_paths,
        } => unite::run(&output, &input_paths),
    }
}
