//! CLI entrypoint for InfraGenie
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use genie_application::{
    CheckErrorsUseCase, IdentityProvider, NO_CORRECTIONS, PromptHistoryUseCase, PromptSession,
    SubmitOutcome, TelemetrySink,
};
use genie_domain::{DownloadArtifact, InteractionMode, UserId, extract_code};
use genie_infrastructure::{
    ConfigLoader, FileConfig, FileIdentityProvider, FileQuotaStore, HttpRequestDispatcher,
    JsonlPromptStore, paths,
};
use genie_presentation::{ChatRepl, Cli, ConsoleFormatter, ProgressReporter, save_download};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, config.logging.file);

    info!("Starting InfraGenie");

    for issue in config.check()? {
        warn!("{}", issue.message);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let identity = Arc::new(
        FileIdentityProvider::new(paths::data_file("identity.json")).with_env_override(),
    );

    if let Some(id) = &cli.sign_in {
        let user = UserId::try_new(id.as_str()).context("User id cannot be empty")?;
        identity.sign_in(&user)?;
        println!("Signed in as {}", user);
        return Ok(ExitCode::SUCCESS);
    }
    if cli.sign_out {
        if identity.sign_out()? {
            println!("Signed out.");
        } else {
            println!("Not signed in.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let prompt_store = open_prompt_store(&config);

    if cli.history {
        let Some(store) = prompt_store else {
            bail!("Prompt history is disabled ([telemetry] enabled = false).");
        };
        let Some(user) = identity.current_user() else {
            bail!("Sign in to view your prompt history: infragenie --sign-in <ID>");
        };
        let records = PromptHistoryUseCase::new(store).execute(Some(&user)).await?;
        println!("{}", ConsoleFormatter::format_history(&records));
        return Ok(ExitCode::SUCCESS);
    }

    let dispatcher = Arc::new(HttpRequestDispatcher::new(config.backend.base_url.as_str()));
    let download_dir = config
        .output
        .download_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    if let Some(path) = &cli.check {
        let code = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let corrected = CheckErrorsUseCase::new(dispatcher)
            .execute(&code, cli.artifact_type.clone())
            .await?;
        println!("{}", ConsoleFormatter::format_corrected(&corrected));
        if cli.download && corrected != NO_CORRECTIONS {
            // The file gets the code only, not the fix notes around it
            let artifact = DownloadArtifact::new(&cli.artifact_type, extract_code(&corrected));
            let saved = save_download(&download_dir, &artifact)?;
            println!("Saved {}", saved.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let quota_path = config
        .quota
        .path
        .clone()
        .unwrap_or_else(|| paths::data_file("quota.json"));
    let quota_store = Arc::new(FileQuotaStore::new(quota_path, config.quota.scope.as_str()));
    let observer = Arc::new(ProgressReporter::new().with_spinner(!cli.quiet));
    let mode = if cli.chat {
        InteractionMode::Chat
    } else {
        InteractionMode::Command
    };

    let mut session = PromptSession::new(
        dispatcher,
        quota_store,
        identity,
        config.session_config(),
    )
    .with_observer(observer)
    .with_mode(mode)
    .with_artifact_type(cli.artifact_type.clone());
    if let Some(store) = &prompt_store {
        let sink: Arc<dyn TelemetrySink> = store.clone();
        session = session.with_telemetry(sink);
    }

    if cli.is_interactive() {
        let mut repl = ChatRepl::new(session)
            .with_download_dir(download_dir)
            .with_tab(cli.tab.unwrap_or_default());
        if let Some(store) = prompt_store {
            repl = repl.with_history(PromptHistoryUseCase::new(store));
        }
        if let Some(prompt) = &cli.prompt {
            repl.process_prompt(prompt).await;
        }
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single prompt mode
    let Some(prompt) = cli.prompt.as_deref() else {
        bail!("Prompt is required. Use --chat for interactive mode.");
    };
    session.set_input(prompt);
    let outcome = session.submit().await;

    if let Some(output) = ConsoleFormatter::format_outcome(&session, &outcome, cli.tab) {
        match outcome {
            SubmitOutcome::Failed(_) => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }

    let code = match &outcome {
        SubmitOutcome::Succeeded | SubmitOutcome::EmptyResult => {
            if cli.download {
                match session.download(cli.tab.unwrap_or_default()) {
                    Some(artifact) => {
                        let saved = save_download(&download_dir, &artifact)?;
                        println!("Saved {}", saved.display());
                    }
                    None => warn!("Nothing to download"),
                }
            }
            ExitCode::SUCCESS
        }
        SubmitOutcome::Denied => {
            // Let the sign-in notice fire before exiting
            tokio::time::sleep(config.session_config().redirect_delay).await;
            ExitCode::from(2)
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => ExitCode::FAILURE,
    };

    // Give the detached telemetry write a chance to land
    tokio::task::yield_now().await;

    Ok(code)
}

/// Install the tracing subscriber.
///
/// Verbosity maps to the console filter (`RUST_LOG` wins when set). With
/// `[logging] file = true`, logs also go to a daily rolling file.
fn init_logging(verbose: u8, to_file: bool) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match (to_file, paths::data_dir()) {
        (true, Some(dir)) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "infragenie.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    guard
}

fn open_prompt_store(config: &FileConfig) -> Option<Arc<JsonlPromptStore>> {
    if !config.telemetry.enabled {
        return None;
    }
    let path = config
        .telemetry
        .path
        .clone()
        .unwrap_or_else(|| paths::data_file("prompts.jsonl"));
    match JsonlPromptStore::open(&path) {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!("Prompt store unavailable at {}: {}", path.display(), e);
            None
        }
    }
}
