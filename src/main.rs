mod parser;
mod serialiser;
mod srt;

use crate::parser::Parser;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: subtool -i <input filename> -o <output filename>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(name = "subtool", about = "Convert SRT subtitles to JSON")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The SRT file to read from.",
        default_value = ""
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The JSON file to write to.",
        default_value = ""
    )]
    output: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !paths_valid(&cli.input, &cli.output) {
        // Not a hard failure; print the usage message and return.
        println!("{}", USAGE);
        return Ok(());
    }

    convert(&cli.input, &cli.output)?;

    println!("Conversion successful. JSON file created.");
    Ok(())
}

/// The input must name an `.srt` file and the output a `.json` file.
fn paths_valid(input: &str, output: &str) -> bool {
    !input.is_empty()
        && input.ends_with(".srt")
        && !output.is_empty()
        && output.ends_with(".json")
}

/// The single conversion pipeline: read everything, parse, serialise.
fn convert(input: &str, output: &str) -> Result<()> {
    let data = std::fs::read_to_string(input)
        .context(format!("Failed to open input file: '{}'", input))?;

    let subs = Parser::new().parse(&data);
    info!(records = subs.len(), "parsed input file");

    serialiser::serialise(&subs, output)
        .context(format!("Failed to write output file: '{}'", output))?;

    Ok(())
}
