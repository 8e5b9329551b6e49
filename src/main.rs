use clap::Parser;
use terminal_config::utils::logger;
use terminal_config::{render, CliConfig, ConfigLoader, ConfigState, StatePublisher};

fn print_state(state: &ConfigState, json: bool) {
    if let Some(text) = render(state, json) {
        if state.error().is_some() && !json {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting terminal-config");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let publisher = StatePublisher::shared();
    let json = cli.json;
    // JSON consumers get exactly one document, printed after the run.
    if !json {
        publisher.subscribe(|state| print_state(state, false));
    }

    let loader = ConfigLoader::new(
        settings.local_storage(),
        settings.template_source()?,
        settings.host_info(),
    )
    .with_preference(settings.preference())
    .with_resolver(settings.resolver())
    .with_publisher(publisher);

    let state = loader.run().await;

    if json {
        print_state(&state, true);
    } else {
        println!("Iniciando desde: {}", loader.host_label());
    }

    if let ConfigState::Failed(_) = state {
        std::process::exit(1);
    }
    Ok(())
}
