use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use sqldialects::cli::commands::generate::{GenerateCommand, GenerateCommandHandler};
use sqldialects::cli::commands::render_output;
use sqldialects::cli::commands::types::{TypesCommand, TypesCommandHandler};
use sqldialects::cli::{Cli, Commands};
use sqldialects::core::config::Dialect;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// トレーシングを初期化する
///
/// RUST_LOG が設定されていればそれに従い、なければ --verbose で debug、既定は warn。
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    match cli.command {
        Commands::Types { dialect, format } => {
            let dialect: Dialect = dialect.parse()?;
            let handler = TypesCommandHandler::new();
            let command = TypesCommand { dialect, format };
            let output = handler.execute(&command)?;
            render_output(&output, cli.output)
        }

        Commands::Generate {
            file,
            dialect,
            drop,
        } => {
            let dialect = dialect.as_deref().map(str::parse::<Dialect>).transpose()?;
            let handler = GenerateCommandHandler::new();
            let command = GenerateCommand {
                file,
                dialect,
                drop,
            };
            let output = handler.execute(&command)?;
            render_output(&output, cli.output)
        }
    }
}
