//! leafmark CLI - print each markdown block's type and inline HTML

use std::io::{self, Read, Write};
use std::process::ExitCode;

use leafmark::{Options, inline_to_html_with_options, parse_blocks};
use log::LevelFilter;

fn main() -> ExitCode {
    let mut verbose = false;
    let mut options = Options::default();
    let mut path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--escape" => options.escape_html = true,
            _ => path = Some(arg),
        }
    }

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    match run(path.as_deref(), &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("leafmark: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<&str>, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    // Read from a file, or stdin for `-` or no argument
    let input = match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut stdout = io::stdout().lock();
    for block in parse_blocks(&input) {
        let html = inline_to_html_with_options(block.text, options)?;
        writeln!(stdout, "{}\t{}", block.kind, html)?;
    }

    Ok(())
}
