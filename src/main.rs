//! resume-matcher: ATS resume checker and resume Q&A bot backed by a hosted LLM

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::manager::InputManager;
use resume_matcher::input::text_extractor::PdfExtractor;
use resume_matcher::llm::{GeminiClient, LanguageModel};
use resume_matcher::output::formatter::{
    banner, error_banner, save_report_to_file, suggest_filename, BannerKind, ReportGenerator,
};
use resume_matcher::processing::matcher::{MatchPipeline, MatchRequest};
use resume_matcher::processing::qa::{ResumeQa, ResumeRecord};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // A missing .env is fine; the key may come from the real environment
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let use_colors = config.output.color_output;
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        if e.is_fatal() {
            error!("{}", e);
        } else {
            eprintln!("{}", error_banner(&e, use_colors));
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_file,
            output,
            save,
            model,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let mut client = GeminiClient::new(&config.model, config.api_key()?)?;
            if let Some(model) = model {
                client = client.with_model(model);
            }

            let job_description = InputManager::new()
                .job_description(job, job_file.as_deref())
                .await?;

            let pipeline = MatchPipeline::new(PdfExtractor, client)?;
            let request = MatchRequest { resume, job_description };

            info!("Starting resume match analysis");
            let report = with_spinner("Analyzing resume...", pipeline.analyze(&request)).await?;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                true,
                true,
                config.output.html_styles,
            );
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &report.resume_file_name()))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &path)?;
                    println!("{}", banner(BannerKind::Success, "Resume Analysis Complete", config.output.color_output));
                    println!("Match score: {}%", report.match_score);
                    println!("📁 Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Ask { question, record } => {
            let client = GeminiClient::new(&config.model, config.api_key()?)?;
            let record = ResumeRecord::load(&record_path(record, &config))?;
            let qa = ResumeQa::new(&record, client);

            let answer = with_spinner("Thinking...", qa.ask(&question)).await?;
            println!("{}", answer.trim_end());
        }

        Commands::Chat { record } => {
            let client = GeminiClient::new(&config.model, config.api_key()?)?;
            let record = ResumeRecord::load(&record_path(record, &config))?;
            let qa = ResumeQa::new(&record, client);

            run_chat(&qa, config.output.color_output).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Model: {}", config.model.name);
                println!("Endpoint: {}", config.model.endpoint);
                println!("API key variable: {}", config.model.api_key_env);
                println!("Timeout: {}s", config.model.timeout_secs);
                println!("Resume record: {}", config.qa.record_path.display());
                println!("Output format: {:?}", config.output.format);
                println!("Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn record_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.qa.record_path.clone())
}

/// Read questions from stdin until EOF or `exit`; a failed question does not end the session.
async fn run_chat<M: LanguageModel>(qa: &ResumeQa<'_, M>, use_colors: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("Ask about the resume. Type 'exit' to quit.");
    loop {
        stdout.write_all(b"\nYou: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        match with_spinner("Thinking...", qa.ask(&line)).await {
            Ok(answer) => println!("Chatbot: {}", answer.trim_end()),
            Err(e) => println!("{}", error_banner(&e, use_colors)),
        }
    }

    Ok(())
}

async fn with_spinner<T>(message: &str, task: impl Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = task.await;
    spinner.finish_and_clear();
    result
}
