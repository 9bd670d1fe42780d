//! CLI entrypoint for testcrew
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use testcrew_application::{NoProgress, ProgressNotifier, RunPipelineInput, RunPipelineUseCase};
use testcrew_domain::{ModelClientFactory, PipelineKind};
use testcrew_infrastructure::{
    ChatCompletionsGateway, ConfigLoader, FileConfig, FileExecutionLogger, LocalArtifactStore,
    YamlTemplateStore, read_llm_settings,
};
use testcrew_presentation::{
    Cli, Command, ConsoleFormatter, DriverArgs, MenuShell, ProgressReporter, SimpleProgress,
    SubprocessLauncher, read_input_name,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    config.validate()?;

    let _guard = init_tracing(cli.verbose, &config.log_dir());
    info!("Starting testcrew");

    match cli.command() {
        Command::Menu => {
            let launcher = SubprocessLauncher::current_exe(cli.forwarded_args())
                .context("Could not locate the testcrew executable")?;
            let exit = MenuShell::new(launcher).run_interactive().await?;
            info!("Menu closed ({:?})", exit);
            Ok(0)
        }
        command => {
            // Every other subcommand names a pipeline
            let (kind, args) = command
                .pipeline()
                .ok_or_else(|| anyhow!("Unsupported command"))?;
            run_driver(kind, args, &config, cli.quiet).await?;
            Ok(0)
        }
    }
}

/// Run one pipeline in this process
async fn run_driver(
    kind: PipelineKind,
    args: &DriverArgs,
    config: &FileConfig,
    quiet: bool,
) -> Result<()> {
    let descriptor = config.descriptor(kind);

    let name = match &args.input {
        Some(name) => name.clone(),
        None => {
            let mut stdin = tokio::io::BufReader::new(tokio::io::stdin());
            read_input_name(&descriptor.input_prompt(), &mut stdin, &mut std::io::stdout())
                .await?
                .context("No input file name given")?
        }
    };

    // === Dependency Injection ===
    let settings = read_llm_settings(&config.llm.api_key_env);
    if settings.api_key.is_none() {
        warn!("{} is not set; requests go out without credentials", config.llm.api_key_env);
    }

    let gateway = Arc::new(ChatCompletionsGateway::new(
        config.llm.base_url.clone(),
        Duration::from_secs(config.llm.request_timeout_secs),
    )?);

    let mut use_case = RunPipelineUseCase::new(
        gateway,
        Arc::new(LocalArtifactStore::current_dir()),
        ModelClientFactory::new(settings),
        config.crew_params(),
    );
    if let Some(logger) = FileExecutionLogger::new(config.execution_log_path(&descriptor)) {
        use_case = use_case.with_execution_log(Arc::new(logger));
    }

    let input = use_case.load_input(&descriptor, &name).await?;
    let templates = YamlTemplateStore::new(config.templates_dir()).load()?;

    if !quiet {
        println!();
        println!("{}: {}", descriptor.kind.display_name(), input.path);
        println!();
    }

    let progress: Box<dyn ProgressNotifier> = if quiet {
        Box::new(NoProgress)
    } else if std::io::stdout().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = use_case
        .execute_with_progress(
            RunPipelineInput::new(descriptor, input.content),
            &templates,
            progress.as_ref(),
        )
        .await?;

    let output = if quiet {
        ConsoleFormatter::format_raw(&result)
    } else {
        ConsoleFormatter::format(&result)
    };
    print!("{}", output);

    Ok(())
}

/// Console layer on stderr plus a daily rolling file under `log_dir`.
///
/// `-v` flags pick the level; without them `RUST_LOG` applies, then `warn`.
fn init_tracing(verbose: u8, log_dir: &Path) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match std::fs::create_dir_all(log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(log_dir, "testcrew.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
