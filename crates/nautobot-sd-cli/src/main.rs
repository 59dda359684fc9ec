//! nautobot-sd CLI
//!
//! Inspect query documents and render the target list without starting the
//! daemon.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use nautobot_sd_client::GraphqlClient;
use nautobot_sd_core::{
    ENV_FILE, JobLabelSource, NautobotCredentials, build_snapshot, load_queries,
};

#[derive(Parser, Debug)]
#[command(name = "nautobot-sd-cli", version)]
#[command(about = "Inspect Nautobot service discovery output", long_about = None)]
struct Cli {
    /// Directory containing query documents
    #[arg(long, global = true, default_value = "graphql_queries")]
    query_dir: PathBuf,

    /// File name suffix of query documents
    #[arg(long, global = true, default_value = ".gql")]
    suffix: String,

    /// Source of the job label (role or query)
    #[arg(long, global = true, default_value = "role")]
    job_label: JobLabelSource,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the query documents that would be loaded
    Queries,
    /// Query Nautobot and print the target list the daemon would serve
    Render,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let documents = load_queries(&cli.query_dir, &cli.suffix)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Queries => {
            for document in &documents {
                writeln!(stdout, "{}\t{}", document.name, document.path.display())?;
            }
        }
        Commands::Render => {
            let credentials = NautobotCredentials::from_env_file(Path::new(ENV_FILE))?;
            let client = GraphqlClient::new(&credentials.url, credentials.token)
                .wrap_err("invalid NAUTOBOT_URL")?;
            let snapshot = build_snapshot(&client, &documents, cli.job_label).await?;
            stdout.write_all(snapshot.body())?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["nautobot-sd-cli", "queries"]).unwrap();
        assert_eq!(cli.query_dir, PathBuf::from("graphql_queries"));
        assert_eq!(cli.suffix, ".gql");
        assert_eq!(cli.job_label, JobLabelSource::Role);
        assert!(matches!(cli.command, Commands::Queries));
    }

    #[test]
    fn test_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "nautobot-sd-cli",
            "render",
            "--query-dir",
            "/srv/queries",
            "--job-label",
            "query",
        ])
        .unwrap();
        assert_eq!(cli.query_dir, PathBuf::from("/srv/queries"));
        assert_eq!(cli.job_label, JobLabelSource::Query);
        assert!(matches!(cli.command, Commands::Render));
    }

    #[test]
    fn test_rejects_unknown_job_label() {
        assert!(Cli::try_parse_from(["nautobot-sd-cli", "--job-label", "site", "render"]).is_err());
    }
}
