use anyhow::Context;
use clap::Parser;
use sveldoc::cli::{display, Cli, Commands};
use sveldoc::{segment, search, DocRegistry, DocServer, DocsFetcher};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout is the protocol channel in serve mode.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    match cli.command {
        Commands::Serve { url } => runtime.block_on(run_serve(url.as_deref())),
        Commands::Search {
            query,
            limit,
            file,
            url,
        } => runtime.block_on(run_search(&query, limit, file.as_deref(), url.as_deref())),
        Commands::Sections { file, url } => {
            runtime.block_on(run_sections(file.as_deref(), url.as_deref()))
        }
    }
}

/// Fetch, segment, publish, serve. Fetch exhaustion here is fatal: with no
/// prior successful load the process has nothing to serve.
async fn run_serve(url: Option<&str>) -> anyhow::Result<()> {
    let registry = load_registry(None, url).await?;
    tracing::info!(
        sections = registry.sections().len(),
        "documentation loaded, serving on stdio"
    );
    DocServer::new(registry).run().await?;
    Ok(())
}

async fn run_search(
    query: &str,
    limit: usize,
    file: Option<&str>,
    url: Option<&str>,
) -> anyhow::Result<()> {
    let registry = load_registry(file, url).await?;
    let outcome = search(registry.sections(), query, limit);
    display::print_outcome(&outcome, query);
    Ok(())
}

async fn run_sections(file: Option<&str>, url: Option<&str>) -> anyhow::Result<()> {
    let registry = load_registry(file, url).await?;
    display::print_sections(registry.sections());
    Ok(())
}

/// Load the document (local file or remote fetch), segment it, and publish
/// the section list.
async fn load_registry(file: Option<&str>, url: Option<&str>) -> anyhow::Result<DocRegistry> {
    let raw_text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read documentation file '{path}'"))?,
        None => {
            let url = DocsFetcher::resolve_url(url);
            let fetcher = DocsFetcher::new(&url)?;
            fetcher.fetch().await.context("documentation fetch failed")?
        }
    };

    let sections = segment(&raw_text).context("documentation segmentation failed")?;
    DocRegistry::publish(sections)
        .map_err(|e| anyhow::anyhow!("section invariant violation: {e}"))
}
