//! deskcalc: keystroke-driven desk calculator
//!
//! ## Usage
//!
//! ```bash
//! deskcalc tui                        # Interactive calculator
//! deskcalc eval "2 + 3 + 4 ="         # Prints 9
//! deskcalc eval --steps "4 [NEG] √"   # Display after every key
//! deskcalc --precision 4 eval "1÷3="  # Prints 0.3333
//! deskcalc keys                       # Key bindings and script syntax
//! ```

use clap::Parser;
use deskcalc_cli::{
    logging, run_eval, run_keys, run_tui, Cli, CliConfig, CliResult, ColorChoice, Commands,
    Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init(config.verbosity);

    match cli.command {
        Commands::Tui => run_tui(&config),
        Commands::Eval(args) => run_eval(&config, &args, &mut std::io::stdout().lock()),
        Commands::Keys => run_keys(&config, &mut std::io::stdout().lock()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    let mut config = CliConfig::new().with_verbosity(verbosity).with_color(color);
    if let Some(digits) = cli.max_digits {
        config = config.with_max_digits(digits);
    }
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }
    config
}
