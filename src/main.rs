mod cli;
mod config;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use config::Settings;
use deplister::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use deplister::application::dto::{ScanRequest, ScanResponse};
use deplister::application::factories::{
    CollectorFactory, FormatterFactory, PresenterFactory, PresenterType,
};
use deplister::application::use_cases::ScanDependenciesUseCase;
use deplister::ports::outbound::ProgressReporter;
use deplister::shared::error::{DeplisterError, ExitCode};
use deplister::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // clap renders its own usage and help text
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let discovered = config::discover_config(&project_path)?;
            if discovered.is_some() && !args.quiet {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    project_path.join(config::CONFIG_FILENAME).display()
                );
            }
            discovered
        }
    };
    let settings = config::merge_settings(&args, config)?;

    let response = if args.quiet {
        scan(SilentProgressReporter, &project_path, &settings)?
    } else {
        let response = scan(StderrProgressReporter::new(), &project_path, &settings)?;
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
        response
    };

    let formatter = FormatterFactory::create(settings.format, settings.pretty);
    let report = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.out));
    presenter.present(&report)?;

    Ok(())
}

fn scan<PR: ProgressReporter>(
    progress_reporter: PR,
    project_path: &Path,
    settings: &Settings,
) -> Result<ScanResponse> {
    let collectors = CollectorFactory::create_all(settings.command_retries);
    let use_case = ScanDependenciesUseCase::new(collectors, progress_reporter);
    let request = ScanRequest::new(project_path.to_path_buf(), settings.exclude_patterns.clone());
    use_case.execute(request)
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| -> anyhow::Error {
        DeplisterError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()));
    }

    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. Symbolic links are not allowed.".to_string(),
        ));
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()));
    }

    Ok(())
}
