use std::process::ExitCode;

use clap::Parser;
use kunai_app::cli::Cli;
use kunai_app::input::read_component;
use kunai_app::report::{Outcome, Status, run};
use kunai_core::config::load_config;
use kunai_rfc::rfc::validation::Validator;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = execute(&cli, &filter_handle);
    if let Err(e) = &result {
        tracing::error!(error = %e, "Validation could not run");
    }

    ExitCode::from(Status::of_run(&result).code())
}

fn execute(
    cli: &Cli,
    filter_handle: &reload::Handle<EnvFilter, Registry>,
) -> anyhow::Result<Vec<Outcome>> {
    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let validator = Validator::standard()?;
    let strictness = cli.strictness(&config.validation);

    let root = read_component(cli.input.as_deref())?;
    let outcomes = run(&validator, &root, cli.method, strictness)?;

    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    Ok(outcomes)
}
