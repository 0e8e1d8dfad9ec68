use clap::Parser;
use mullai::{cli, config, error, export, geocode, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use geocode::NominatimClient;
use mullai_common::{evaluate, render_view, Coordinate, Decision, View, WorkflowState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Evaluate { lat, lon, purpose, json } => {
            let decision = evaluate(
                Coordinate::new(lat, lon),
                purpose.unwrap_or(config.default_purpose),
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                print_decision(&decision);
            }
        }

        Commands::Search { text } => {
            let client = NominatimClient::from_config(&config)?;
            let coordinate = geocode::resolve(&text, &client).await?;
            println!("📍 {}", coordinate);
        }

        Commands::Claim { location, purpose, appeal, save, report } => {
            println!("🌱 mullai - Land Claim\n");

            let client = NominatimClient::from_config(&config)?;
            let state = WorkflowState::new().set_purpose(purpose.unwrap_or(config.default_purpose));

            // 1. 地点選択
            println!("[1/2] Resolving location...");
            let state = geocode::resolve_search(&state, &location, &client).await?;
            if let Some(coordinate) = state.selected_coordinate {
                println!("✔ Location: {}\n", coordinate);
            }

            // 2. 申請
            println!("[2/2] Submitting claim ({})...", state.purpose);
            let mut state = state.submit_claim()?;
            print_view(&state);

            if appeal {
                state = state.appeal();
                print_view(&state);
            }

            if let Some(path) = save {
                if let Some(decision) = &state.decision {
                    std::fs::write(&path, serde_json::to_string_pretty(decision)?)?;
                    println!("✔ Decision saved: {}", path.display());
                }
            }

            if let Some(output) = report {
                let path = export::export_report(state.decision.as_ref(), &output, &config.report_file_name)?;
                println!("✔ Report saved: {}", path.display());
            }
        }

        Commands::Report { input, output } => {
            println!("📄 mullai - Decision Report\n");

            let decision: Option<Decision> = match input {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)?;
                    Some(serde_json::from_str(&content)?)
                }
                None => None,
            };

            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let path = export::export_report(decision.as_ref(), &output_dir, &config.report_file_name)?;
            println!("✔ Report saved: {}", path.display());
        }

        Commands::Session => {
            let client = NominatimClient::from_config(&config)?;
            let state = WorkflowState::new().set_purpose(config.default_purpose);
            let mut session = session::Session::new(
                state,
                &client,
                std::env::current_dir()?,
                config.report_file_name.clone(),
            );
            session.run_interactive().await?;
        }

        Commands::Config { set_geocoder_url, set_user_agent, show } => {
            let mut config = config;

            if let Some(url) = set_geocoder_url {
                config.set_geocoder_url(url)?;
                println!("✔ Geocoder URL updated");
            }

            if let Some(user_agent) = set_user_agent {
                config.set_user_agent(user_agent)?;
                println!("✔ User-Agent updated");
            }

            if show {
                println!("Config:");
                println!("  Path: {}", Config::config_path()?.display());
                println!("  Geocoder URL: {}", config.geocoder_url);
                println!("  User-Agent: {}", config.user_agent);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Report file: {}", config.report_file_name);
                println!("  Default purpose: {}", config.default_purpose);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn print_decision(decision: &Decision) {
    println!("Decision: {}", decision.verdict);
    println!("Reason: {}", decision.reason);
    println!("Purpose: {}", decision.purpose);
    println!("Coordinates: {}", decision.coordinate);
}

fn print_view(state: &WorkflowState) {
    let content = render_view(state);
    let icon = match state.active_view {
        View::Decision => "📄",
        View::Appeal => "⚖️",
        View::Map => "🗺️",
        View::About => "ℹ️",
    };
    println!("\n{} {}", icon, content.title);
    for line in &content.lines {
        println!("  {}", line);
    }
}
