use anyhow::Context;
use clap::Parser;
use toon_resolver::config::Command;
use toon_resolver::utils::error::ErrorSeverity;
use toon_resolver::utils::{logger, validation::Validate};
use toon_resolver::{
    extras, format_rating_with_template, CliConfig, SelectionRequest, ServiceConfig,
    ServiceResolver, ToonError,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let config = ServiceConfig::from_file(path).map_err(exit_on_error)?;
            config.validate().map_err(exit_on_error)?;
            config
        }
        None => ServiceConfig::default(),
    };

    let resolver = ServiceResolver::from_config(&config).map_err(exit_on_error)?;

    match cli.command {
        Command::Resolve { service, request } => {
            let request = match (service, request) {
                (Some(name), _) => Some(SelectionRequest::new().with_extra(extras::EXTRA_API, name)),
                (None, Some(json)) => Some(
                    SelectionRequest::from_json(&json)
                        .context("--request must be a JSON object")?,
                ),
                (None, None) => None,
            };

            let api = resolver.resolve(request.as_ref());
            println!("{}\t{}", api.kind(), api.base_url());
        }
        Command::Rate { value } => {
            let formatted =
                format_rating_with_template(config.rating_format(), &value).map_err(exit_on_error)?;
            println!("{}", formatted);
        }
        Command::List => {
            for entry in resolver.registry().entries() {
                let marker = if entry.kind == resolver.default_kind() {
                    "*"
                } else {
                    " "
                };
                println!("{} {:<10} {}", marker, entry.kind, entry.description);
            }
        }
        Command::Keys => {
            for key in extras::ALL_EXTRA_KEYS {
                println!("{}", key);
            }
        }
    }

    Ok(())
}

/// Reports `e` and terminates with an exit code matching its severity.
fn exit_on_error(e: ToonError) -> anyhow::Error {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
