use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use course_feedback::api::ApiClient;
use course_feedback::config::Config;
use course_feedback::logging::{init_file_tracing, init_stderr_tracing};
use course_feedback::ui;
use course_feedback::ui::screen::Route;

#[derive(Debug, Parser)]
#[command(name = "course-feedback", version, about = "Terminal client for the course feedback service")]
struct Cli {
    /// Base origin of the feedback service (overrides config and environment)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen to open first
    #[arg(long, value_enum, default_value_t = StartScreen::Login)]
    screen: StartScreen,

    /// Log filter, e.g. `debug` or `course_feedback=trace`
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the course list and the open feedback request once, then exit
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartScreen {
    Login,
    Signup,
    RequestForm,
    StudentForm,
    Summary,
    Detail,
}

impl From<StartScreen> for Route {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Login => Route::Login,
            StartScreen::Signup => Route::Signup,
            StartScreen::RequestForm => Route::RequestForm,
            StartScreen::StudentForm => Route::StudentForm,
            StartScreen::Summary => Route::Summary,
            StartScreen::Detail => Route::Detail,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("course-feedback-io")
        .build()
        .context("Failed to start async runtime")?;

    let api = Arc::new(ApiClient::new(&config.api).context("Failed to create API client")?);

    match cli.command {
        Some(Command::Check) => {
            init_stderr_tracing(&config.logging, cli.log_level.as_deref());
            runtime.block_on(check(&api))
        }
        None => {
            let log_path = init_file_tracing(&config.logging, cli.log_level.as_deref())
                .context("Failed to open log file")?;
            tracing::info!(
                base_url = %api.base_url(),
                log = %log_path.display(),
                "Starting course feedback client"
            );
            ui::run(api, runtime.handle().clone(), &config.ui, cli.screen.into())
                .context("Terminal UI failed")
        }
    }
}

/// Config file, then environment, then command line.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_overrides(cli.config.as_deref(), cli.base_url.as_deref())?;
    Ok(config)
}

async fn check(api: &ApiClient) -> Result<()> {
    let courses = api.courses().await.context("GET courses failed")?;
    println!("Courses ({}):", courses.len());
    for course in courses.into_inner() {
        println!("  {}", course);
    }

    let info = api
        .feedback_info()
        .await
        .context("GET feedback_info failed")?;
    println!("Open request:");
    println!("  Topic:       {}", info.topic);
    println!("  Date:        {}", info.request_date);
    println!("  Course Name: {}", info.course_name);
    Ok(())
}
