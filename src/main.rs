use clap::Parser as ClapParser;
use lox_scanner::{Config, Lox, LoxError, OutputFormat};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(author, version, about = "Lox scanner")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted
    #[arg(value_name = "script")]
    scripts: Vec<PathBuf>,
    /// How tokens are printed (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Print a scan summary to stderr after each run
    #[arg(long)]
    debug: bool,
}

fn run(cli: Cli) -> Result<(), LoxError> {
    if cli.scripts.len() > 1 {
        return Err(LoxError::Usage(String::from("lox")));
    }

    let mut config = Config::load()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.debug |= cli.debug;

    let lox = Lox::new(config);
    match cli.scripts.first() {
        Some(script) => lox.run_file(script),
        None => {
            let stdin = io::stdin();
            lox.run_prompt(stdin.lock(), io::stdout(), io::stderr())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Each lexical error has already been printed.
        Err(e @ LoxError::Lexical { .. }) => ExitCode::from(e.exit_code()),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
