mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fixtures")]
#[command(version, about = "Data set fixture comparison CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an expected fixture with an actual one
    Compare {
        /// Expected fixture (file or directory)
        expected: String,

        /// Actual fixture (file or directory)
        actual: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Stop at the first table that differs
        #[arg(long)]
        fail_fast: bool,
    },

    /// List the tables of a fixture
    Tables {
        /// Fixture (file or directory)
        fixture: String,

        /// List in reverse order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print the content of a fixture
    Show {
        /// Fixture (file or directory)
        fixture: String,

        /// Only show this table
        #[arg(short, long)]
        table: Option<String>,

        /// Output format: text, yaml, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so yaml and json output stay parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Compare {
            expected,
            actual,
            format,
            fail_fast,
        } => commands::compare::execute(&expected, &actual, &format, fail_fast),

        Commands::Tables { fixture, reverse } => commands::tables::execute(&fixture, reverse),

        Commands::Show {
            fixture,
            table,
            format,
        } => commands::show::execute(&fixture, table.as_deref(), &format),
    }
}
