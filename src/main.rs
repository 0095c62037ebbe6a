mod cli;

use cli::Args;
use depend_info::adapters::outbound::console::StderrProgressReporter;
use depend_info::adapters::outbound::filesystem::PortsDirectoryReader;
use depend_info::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use depend_info::application::use_cases::DependInfoUseCase;
use depend_info::config::{self, Settings};
use depend_info::shared::error::ExitCode;
use depend_info::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on failure)
    let args = Args::parse_args();

    let settings = load_settings(args.config.as_deref())?;
    let invocation = args.resolve(settings);

    // Create adapters (Dependency Injection)
    let catalog_reader = PortsDirectoryReader::new();
    let progress_reporter = StderrProgressReporter::new();
    let use_case = DependInfoUseCase::new(catalog_reader, progress_reporter);

    let response = use_case.execute(invocation.to_request())?;

    eprintln!("{}", RendererFactory::progress_message(invocation.format));
    let rendered = RendererFactory::create(invocation.format).render(&response.graph);

    let presenter = PresenterFactory::create(PresenterType::for_output(invocation.output));
    presenter.present(&rendered)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise the working directory is
/// searched and a missing file means "no settings".
fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let settings = config::load_config_from_path(path)?;
        eprintln!("⚙️  Loaded config from: {}", path.display());
        return Ok(settings);
    }

    match config::discover_config(Path::new("."))? {
        Some(settings) => {
            eprintln!(
                "⚙️  Auto-discovered config file: {}",
                config::CONFIG_FILENAME
            );
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}
