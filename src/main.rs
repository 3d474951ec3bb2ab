use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use std::fs::OpenOptions;
use std::process;

use softlayer_cli::api::{Managers, SoftLayerClient};
use softlayer_cli::cli::{Cli, Context, dispatch};
use softlayer_cli::config::Config;
use softlayer_cli::error::{EXIT_USAGE, exit_code_for};
use softlayer_cli::ui::TerminalUi;

fn init_logging(config: Option<&Config>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = config.and_then(|c| c.log_file.as_ref()) {
        match OpenOptions::new().create(true).write(true).truncate(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Failed to open log file {}: {}", path.display(), e),
        }
    }
    builder.init();
}

fn fail(err: &anyhow::Error) -> ! {
    eprintln!("{}", "FAILED".red().bold());
    eprintln!("{}", err);
    process::exit(exit_code_for(err));
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = Config::load();
    init_logging(config.as_ref().ok());
    info!("Starting slcli");

    let output = match cli.output_format() {
        Ok(output) => output,
        Err(e) => fail(&anyhow::Error::from(e)),
    };

    // Credentials are only needed once a command reaches the API, so
    // usage errors are still reported when none are configured.
    let managers = config
        .and_then(|c| SoftLayerClient::from_config(&c))
        .map(Managers::softlayer);

    let mut ui = TerminalUi::new();
    let result = match &managers {
        Ok(managers) => {
            let mut ctx = Context::new(managers, &mut ui, output);
            dispatch(cli.command, &mut ctx).await
        }
        Err(e) => {
            warn!("API client unavailable: {}", e);
            let mut ctx = Context::without_managers(e.to_string(), &mut ui, output);
            dispatch(cli.command, &mut ctx).await
        }
    };

    if let Err(e) = result {
        fail(&e);
    }
}
