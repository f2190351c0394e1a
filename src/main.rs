use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use sql2asciidoc::{convert, ConvertOptions, OutputMode, RenderOptions};

#[derive(Parser)]
#[command(name = "sql2asciidoc")]
#[command(author, version, about = "Document Oracle SQL DDL scripts as AsciiDoc")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IoArgs {
    /// SQL script to read (defaults to stdin)
    input: Option<PathBuf>,

    /// Output file; "-" for stdout (defaults to <input>.asciidoc, or stdout when reading stdin)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write progress details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render tables (and optionally views) as AsciiDoc
    Doc {
        #[command(flatten)]
        io: IoArgs,

        /// Title underline characters. One character: tables only, underlined
        /// with it. Two or more: the first underlines the "Tables"/"Views"
        /// captions, the second each object name, and views are included.
        #[arg(short = 'c', long, default_value = "~")]
        title_char: String,
    },
    /// Rebuild COMMENT ON statements from table and column descriptions
    Comments {
        #[command(flatten)]
        io: IoArgs,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (io, render) = match cli.command {
        Commands::Doc { io, title_char } => {
            let render = RenderOptions::default().with_title_chars(&title_char)?;
            (io, render)
        }
        Commands::Comments { io } => {
            let render = RenderOptions {
                mode: OutputMode::Comments,
                ..RenderOptions::default()
            };
            (io, render)
        }
    };

    init_logging(io.verbose);

    convert(ConvertOptions {
        input_path: io.input,
        output_path: io.output,
        render,
    })?;

    Ok(())
}
