use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codegrade_core::{
    CodeExecutor, ExecutorConfig, ScriptExecutor, TestCase, TestHarness, DEFAULT_TIMEOUT_MS,
};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "CodeGrade",
    author,
    version = "0.1.0",
    about = "Sandboxed code execution and grading engine"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a source file and print the execution result as JSON
    Run {
        /// Path to the source file
        file: PathBuf,

        #[clap(long, short, help = "Language tag, e.g. javascript or python")]
        language: String,

        #[clap(long, default_value_t = DEFAULT_TIMEOUT_MS)]
        timeout_ms: u64,
    },
    /// Grade a source file against a test manifest and print the results as JSON
    Grade {
        /// Path to the source file
        file: PathBuf,

        #[clap(long, short, help = "Language tag, e.g. javascript or python")]
        language: String,

        #[clap(
            long,
            short,
            help = "Path to a JSON array of test cases: [{\"testExpression\", \"expected\", \"name\"}]"
        )]
        tests: PathBuf,

        #[clap(long, default_value_t = DEFAULT_TIMEOUT_MS)]
        timeout_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = cli
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).init();

    match cli.command {
        Commands::Run {
            file,
            language,
            timeout_ms,
        } => {
            let code = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let executor =
                ScriptExecutor::with_config(ExecutorConfig::new().with_timeout_ms(timeout_ms));

            let result = executor.execute(&code, &language).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.success {
                std::process::exit(1);
            }
        }
        Commands::Grade {
            file,
            language,
            tests,
            timeout_ms,
        } => {
            let code = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let manifest = std::fs::read_to_string(&tests)
                .with_context(|| format!("failed to read {}", tests.display()))?;
            let tests: Vec<TestCase> =
                serde_json::from_str(&manifest).context("invalid test manifest")?;

            let executor = Arc::new(ScriptExecutor::with_config(
                ExecutorConfig::new().with_timeout_ms(timeout_ms),
            ));
            let harness = TestHarness::new(executor);

            let results = harness.run_tests(&code, &language, &tests).await;
            println!("{}", serde_json::to_string_pretty(&results)?);

            let passed = results.iter().filter(|result| result.passed).count();
            log::info!("{} of {} test cases passed", passed, results.len());
            if passed < results.len() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
