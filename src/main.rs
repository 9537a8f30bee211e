mod cli;

use cli::Args;
use dyn_inventory::adapters::outbound::formatters::DEFAULT_INDENT;
use dyn_inventory::config::{discover_config, load_config_from_path, Settings};
use dyn_inventory::prelude::*;
use dyn_inventory::shared::error::ExitCode;
use owo_colors::{OwoColorize, Stream};
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. "debug")
const LOG_ENV: &str = "DYN_INVENTORY_LOG";

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };
    init_tracing(args.verbose);

    let code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!(
                "\n{}\n",
                "❌ An error occurred:".if_supports_color(Stream::Stderr, |t| t.red())
            );
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    tracing::debug!(exit_code = %code, "finished");
    process::exit(code.as_i32());
}

/// Logs go to stderr; stdout carries only the inventory document.
fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn run(args: Args) -> Result<()> {
    let request = args.request();
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    // No flags: answer `{}` without touching the config or the inventory
    if request == InventoryRequest::Default {
        let indent = args.overrides().indent.unwrap_or(DEFAULT_INDENT);
        let output = InventoryResponse::HostVars(HostVars::new())
            .render(&JsonFormatter::with_indent(indent))?;
        return presenter.present(&output);
    }

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let settings = Settings::merge(config, args.overrides());

    let response = match settings.inventory {
        Some(path) => execute(FileSystemInventorySource::new(path), settings.query, request)?,
        None => {
            tracing::info!("no inventory source configured; serving an empty inventory");
            execute(StaticInventorySource::empty(), settings.query, request)?
        }
    };

    let formatter = JsonFormatter::with_indent(settings.indent);
    let output = response.render(&formatter)?;

    presenter.present(&output)
}

fn execute<S: InventorySource>(
    source: S,
    options: QueryOptions,
    request: InventoryRequest,
) -> Result<InventoryResponse> {
    QueryInventoryUseCase::new(source, options).execute(request)
}
