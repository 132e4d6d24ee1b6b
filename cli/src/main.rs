//! CLI entrypoint for hal9000
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hal_application::{
    Agent, AgentConfig, ConversationLogger, SilentSpeech, SpeechOutputPort,
    StartupListenUseCase,
};
use hal_infrastructure::{
    ConfigLoader, FileConfig, JsonlTranscriptLogger, Microphone, ProcessSpeechOutput,
};
use hal_presentation::{ChatSession, Cli, ConsoleTerminal, ReplConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr (and optionally a file) so they stay out of the chat
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = load_config(&cli)?;
    apply_overrides(&cli, &mut config);
    for issue in config.validate() {
        warn!("{}", issue);
    }

    info!("Starting hal9000");

    let cancel = CancellationToken::new();

    // === Dependency Injection ===
    if config.speech.enabled {
        let (timeout, _) = config.speech.timeout();
        let speech = ProcessSpeechOutput::new(config.speech.to_speech_command(), timeout)
            .with_cancellation(cancel.clone());
        run_session(&config, Arc::new(speech), cancel).await
    } else {
        info!("Speech output disabled");
        run_session(&config, Arc::new(SilentSpeech), cancel).await
    }
}

async fn run_session<S: SpeechOutputPort + 'static>(
    config: &FileConfig,
    speech: Arc<S>,
    cancel: CancellationToken,
) -> Result<()> {
    let terminal = Arc::new(ConsoleTerminal::detect(config.repl.width, config.repl.color));

    let agent_config: AgentConfig = config.agent.to_agent_config();
    let mut agent = Agent::new(terminal.clone(), speech, &agent_config);
    if let Some(path) = &config.transcript.path {
        let logger = JsonlTranscriptLogger::open(path)
            .with_context(|| format!("Failed to open transcript {}", path))?;
        info!("Writing transcript to {}", logger.path().display());
        agent = agent.with_conversation_logger(Arc::new(logger) as Arc<dyn ConversationLogger>);
    }

    let (tick_interval, _) = config.session.tick_interval();
    let mut session = ChatSession::new(agent, terminal, tick_interval)
        .with_cancellation(cancel.clone());

    session.announce();

    if config.listen.enabled {
        let (settings, _) = config.listen.to_listen_settings();
        let microphone = Microphone::new(settings, config.listen.timeout());
        StartupListenUseCase::new(Arc::new(microphone))
            .execute(&cancel)
            .map_err(|e| anyhow!("Audio source unavailable: {e}"))?;
    }

    let repl_config = ReplConfig {
        prompt: config.repl.prompt.clone(),
        history_file: config
            .repl
            .history_file
            .as_ref()
            .map(PathBuf::from)
            .or_else(ConfigLoader::default_history_path),
    };

    let end = session
        .run_interactive(&repl_config)
        .await
        .context("Failed to start the line editor")?;
    info!(?end, "Session finished");

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {e}"))
}

/// Command-line flags take precedence over every config file.
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(location) = &cli.location {
        config.agent.initial_location = location.clone();
    }
    if let Some(seed) = cli.seed {
        config.agent.seed = Some(seed);
    }
    if cli.mute {
        config.speech.enabled = false;
    }
    if cli.listen {
        config.listen.enabled = true;
    }
    if let Some(path) = &cli.transcript {
        config.transcript.path = Some(path.display().to_string());
    }
}

fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
