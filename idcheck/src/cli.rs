// idcheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idcheck")]
#[command(about = "Cross-checks the identity fields extracted from a person's documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Processes every person of the dataset and writes the report file
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🪪 Processes the documents of a single person
    Person {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Identifier reported back in the result
        #[arg(long)]
        person_id: String,

        /// One image per configured document type, in configuration order
        #[arg(long, num_args = 1.., required = true)]
        documents: Vec<PathBuf>,
    },

    /// ✅ Normalizes and verifies an extracted record set ('-' reads stdin)
    Verify {
        /// JSON file mapping document slots to extracted fields
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Exit with error if the person is not verified
        #[arg(long)]
        check: bool,
    },

    /// 🧽 Prints the normalized form of a record set ('-' reads stdin)
    Normalize {
        /// JSON file mapping document slots to extracted fields
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}
