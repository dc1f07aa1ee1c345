use npm_trust::cli::{Args, OutputFormat};
use npm_trust::config::{discover_config, ConfigFile};
use npm_trust::prelude::*;
use npm_trust::shared::error::{ExitCode, TrustError};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

const DEFAULT_CACHE_FILE: &str = ".npm-trust-cache.json";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Optional config file; CLI flags and GITHUB_TOKEN win over it
    let config = discover_config(&project_path)?.unwrap_or_default();

    let token = args
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .or_else(|| config.github_token.clone());

    let format = resolve_format(&args, &config)?;
    let max_depth = args.max_depth.or(config.max_depth);

    // Create adapters (Dependency Injection)
    let tree_loader = PackageLockReader::new();

    let mut github_config = GitHubConfig {
        token,
        ..Default::default()
    };
    if let Some(api_url) = config.api_url.clone() {
        github_config.api_url = api_url;
    }
    let repository_client = GitHubClient::new(github_config)?;

    let cache_store: Box<dyn CacheStore> = if args.no_cache {
        Box::new(InMemoryCacheStore::new())
    } else {
        let cache_path = config
            .cache_file
            .clone()
            .map(PathBuf::from)
            .unwrap_or_else(|| project_path.join(DEFAULT_CACHE_FILE));
        Box::new(JsonFileCacheStore::new(cache_path))
    };

    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = AnalyzeTreeUseCase::new(
        tree_loader,
        repository_client,
        cache_store,
        progress_reporter,
    );

    // Execute use case
    let request = AnalyzeRequest::new(project_path, max_depth);
    let response = use_case.execute(request).await?;

    // Display progress message
    eprintln!("{}", format.progress_message());

    // Format and present the report
    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&response.rows)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// CLI format flag wins; the config file supplies a default.
fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    if let Some(ref format) = config.format {
        return OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e));
    }
    Ok(OutputFormat::Text)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TrustError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| TrustError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(TrustError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(TrustError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
