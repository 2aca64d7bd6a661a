mod convert;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use weblate2strings::{Error, TEMPLATE_FILE_NAME};

use crate::convert::run_yaml_command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose mode: print each parsed key/value pair before rendering.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert Weblate YAML exports into string resource files.
    Yaml {
        /// Glob pattern matching the Weblate input files
        input_pattern: String,

        /// Directory where the output resource files are stored
        output: String,

        /// Weblate context to read strings from
        #[arg(default_value = "weblate")]
        context: String,

        /// Template file governing the output markup
        #[arg(long, default_value = TEMPLATE_FILE_NAME)]
        template: String,
    },

    /// Display version.
    Version,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.commands {
        Commands::Yaml {
            input_pattern,
            output,
            context,
            template,
        } => match run_yaml_command(&input_pattern, &output, &context, &template, args.verbose) {
            Ok(()) => ExitCode::SUCCESS,
            Err(Error::UnrecognizedFileName(_)) => {
                println!("Did not find language code in file names.");
                ExitCode::from(1)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(1)
            }
        },
        Commands::Version => {
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}
