//! CLI entrypoint for answer-synth
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use synth_application::{
    AnswerAggregator, AnswerBatchUseCase, AnswerRequest, collect_embedding_paths,
};
use synth_domain::{AnswerSet, ConfigIssue, OutputFormat, Question};
use synth_infrastructure::{
    ConfigLoader, ConfigValidationError, FileConfig, InMemoryEmbeddings, JsonlAnswerLogger,
    load_answer_models,
};
use synth_presentation::{Cli, ConsoleFormatter};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting answer-synth");

    // === Dependency Injection ===
    let model_dir = cli
        .models
        .clone()
        .unwrap_or_else(|| config.models.directory.clone());
    let models = load_answer_models(&model_dir)
        .with_context(|| format!("Failed to load models from {}", model_dir.display()))?;

    let embedding_paths = collect_embedding_paths(&models);
    if cli.show_embedding_paths {
        for path in &embedding_paths {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let embeddings = InMemoryEmbeddings::load_all(&embedding_paths)
        .context("Failed to load word embeddings")?;
    let text = config.language.to_language_resources();

    let mut aggregator = AnswerAggregator::new(Arc::new(models));
    let answer_log = cli
        .answer_log
        .clone()
        .or_else(|| config.log.answer_log_path());
    if let Some(logger) = answer_log.and_then(JsonlAnswerLogger::open) {
        info!("Answer log: {}", logger.path().display());
        aggregator = aggregator.with_answer_logger(Arc::new(logger));
    }

    let format = config.output.resolve_format(cli.output.map(OutputFormat::from));

    if let Some(batch_path) = &cli.batch {
        let use_case = AnswerBatchUseCase::new(aggregator, Arc::new(text), Arc::new(embeddings))
            .with_max_concurrency(config.batch.max_concurrency);
        return run_batch(&use_case, batch_path, format, cli.quiet).await;
    }

    let Some(question) = cli.question.as_deref() else {
        bail!("Question is required. Use --batch to answer a request file.");
    };
    let question = Question::new(question);
    let (groups, relations) = cli.premise_input();

    let answers = aggregator
        .build_answer(&groups, &relations, &question, &text, &embeddings)
        .context("Failed to build answer")?;
    print!("{}", render(format, cli.quiet, &question, &answers));

    Ok(())
}

/// Install the tracing subscriber, optionally teeing into a log file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer.and(std::io::stderr))
        .init();

    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in config_warnings(&issues, cli.quiet) {
        warn!("{}", issue.message);
    }
    if let Some(err) = ConfigValidationError::from_issues(&issues) {
        return Err(err.into());
    }

    Ok(config)
}

/// Non-fatal config issues to report; `--quiet` silences them.
fn config_warnings(issues: &[ConfigIssue], quiet: bool) -> impl Iterator<Item = &ConfigIssue> {
    issues.iter().filter(move |i| !quiet && !i.is_error())
}

async fn run_batch(
    use_case: &AnswerBatchUseCase,
    path: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let requests = read_requests(path)?;
    let questions: Vec<Question> = requests.iter().map(|r| r.question.clone()).collect();
    info!("Answering {} requests from {}", requests.len(), path.display());

    let results = use_case.execute(requests).await;

    let mut failed = 0usize;
    for (question, result) in questions.iter().zip(&results) {
        match (result, format) {
            (Ok(answers), _) => print!("{}", render(format, quiet, question, answers)),
            (Err(e), OutputFormat::Json) => {
                failed += 1;
                println!("{}", ConsoleFormatter::format_json_error(question, e));
            }
            (Err(e), OutputFormat::Text) => {
                failed += 1;
                eprint!("{}", ConsoleFormatter::format_error(question, e));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} requests failed", failed, results.len());
    }
    Ok(())
}

/// Parse a JSONL request file, skipping blank lines.
fn read_requests(path: &Path) -> Result<Vec<AnswerRequest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{}:{}: invalid request", path.display(), n + 1))
        })
        .collect()
}

fn render(format: OutputFormat, quiet: bool, question: &Question, answers: &AnswerSet) -> String {
    match format {
        OutputFormat::Json => format!("{}\n", ConsoleFormatter::format_json(question, answers)),
        OutputFormat::Text if quiet => ConsoleFormatter::format_answers_only(answers),
        OutputFormat::Text => ConsoleFormatter::format(question, answers),
    }
}
