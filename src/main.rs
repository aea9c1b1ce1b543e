use anyhow::{bail, Context, Result};
use clap::Parser;
use log::error;
use siteaudit::models::AppState;
use siteaudit::utils::{init_logging, print_report, save_results};
use siteaudit::{
    api, AuditRequest, Auditor, AuditorConfig, Strategy, DEFAULT_TIMEOUT_SECS, PAGESPEED_API_URL,
};
use std::{net::SocketAddr, path::PathBuf, time::Duration};

const EXAMPLES: &str = "Examples:
  siteaudit https://example.com
  siteaudit https://example.com --strategy desktop
  siteaudit example.com --both --output results.json
  siteaudit --serve 127.0.0.1:3043";

#[derive(Parser)]
#[command(name = "siteaudit")]
#[command(about = "Perform a technical audit of a website through PageSpeed Insights")]
#[command(version, after_help = EXAMPLES)]
struct Cli {
    /// URL of the website to audit (https:// is added when no scheme is given)
    #[arg(required_unless_present = "serve")]
    url: Option<String>,

    /// Google PageSpeed Insights API key (optional, for higher rate limits)
    #[arg(long, env = "PAGESPEED_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Audit strategy: mobile or desktop
    #[arg(long, default_value = "mobile", conflicts_with = "both")]
    strategy: Strategy,

    /// Run the audit for both mobile and desktop
    #[arg(long)]
    both: bool,

    /// Write the results to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// PageSpeed endpoint to call
    #[arg(long, env = "PAGESPEED_ENDPOINT", default_value = PAGESPEED_API_URL)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "PAGESPEED_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Serve GET /audit on this address instead of running a single audit
    #[arg(long, value_name = "ADDR", conflicts_with_all = ["url", "both", "output"])]
    serve: Option<SocketAddr>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AuditorConfig::default()
        .with_endpoint(cli.endpoint.clone())
        .with_timeout(Duration::from_secs(cli.timeout));
    let auditor = Auditor::new(config).context("Failed to build HTTP client")?;

    if let Some(addr) = cli.serve {
        let state = AppState::new(auditor, cli.api_key.clone());
        return api::serve(addr, state)
            .await
            .with_context(|| format!("Server on {} stopped", addr));
    }

    let url = cli.url.as_deref().context("A URL to audit is required")?;
    let request = AuditRequest::new(url, cli.strategy)?.with_api_key(cli.api_key.clone());

    if cli.both {
        run_both(&auditor, &request, cli.output.as_ref()).await
    } else {
        run_single(&auditor, &request, cli.output.as_ref()).await
    }
}

async fn run_single(
    auditor: &Auditor,
    request: &AuditRequest,
    output: Option<&PathBuf>,
) -> Result<()> {
    let result = auditor
        .audit(request)
        .await
        .with_context(|| format!("Audit of {} failed", request.url()))?;
    print_report(&result);

    if let Some(path) = output {
        save_results(path, &result)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n💾 Results saved to: {}", path.display());
    }
    Ok(())
}

async fn run_both(
    auditor: &Auditor,
    request: &AuditRequest,
    output: Option<&PathBuf>,
) -> Result<()> {
    let (combined, failures) = auditor.audit_both(request).await.into_combined();

    for (i, result) in combined.results().enumerate() {
        if i > 0 {
            println!("\n\n");
        }
        print_report(result);
    }
    for (strategy, e) in &failures {
        error!("❌ {} audit of {} failed: {}", strategy, request.url(), e);
    }

    if let Some(path) = output {
        save_results(path, &combined)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n💾 Results saved to: {}", path.display());
    }

    if !failures.is_empty() {
        let failed: Vec<&str> = failures.iter().map(|(s, _)| s.as_str()).collect();
        bail!("{} audit failed for {}", failed.join(" and "), request.url());
    }
    Ok(())
}
