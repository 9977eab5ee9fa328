use std::{fs, process::ExitCode};

use clap::Parser;
use nexlang::{response::respond, run};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "NEXLANG_LOG";

/// nexlang runs small nex scripts and prints what they print.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nexlang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the JSON response payload instead of the raw output.
    #[arg(short, long)]
    json: bool,

    contents: String,
}

fn install_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();
}

fn main() -> ExitCode {
    install_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.json {
        let response = respond(&script);
        return match serde_json::to_string(&response) {
            Ok(json) => {
                println!("{json}");
                if response.ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
            },
            Err(e) => {
                eprintln!("Failed to encode the response: {e}");
                ExitCode::FAILURE
            },
        };
    }

    match run(&script) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        },
        Err(failure) => {
            if !failure.partial_output.is_empty() {
                println!("{}", failure.partial_output);
            }
            eprintln!("{failure}");
            ExitCode::FAILURE
        },
    }
}
