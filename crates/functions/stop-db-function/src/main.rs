//! Stop DB Function - Lambda entry point and local invoker.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use stop_db_function_lib::{
    config::StopDbFunctionConfig,
    invoke_once,
    logging::{init_tracing, LogTarget},
    run_lambda,
};

#[derive(Parser)]
#[command(name = "stop-db-function")]
#[command(about = "Stops an RDS DB cluster on invocation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run inside the Lambda runtime (default)
    Serve,
    /// Stop the cluster once from this machine and print the outcome
    Invoke {
        /// Cluster identifier (overrides DB_CLUSTER_IDENTIFIER)
        #[arg(long)]
        cluster: Option<String>,
        /// AWS region
        #[arg(long)]
        region: Option<String>,
        /// Control-plane endpoint (e.g., a local emulator)
        #[arg(long)]
        endpoint_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StopDbFunctionConfig::from_env()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            init_tracing(config.log_format, LogTarget::Lambda, cli.verbose);
            config.report_ignored();
            run_lambda(config).await?;
        }
        Commands::Invoke {
            cluster,
            region,
            endpoint_url,
        } => {
            init_tracing(config.log_format, LogTarget::Terminal, cli.verbose);
            config.report_ignored();

            let mut config = config.with_cluster(cluster);
            config.aws.region = region.or(config.aws.region);
            config.aws.endpoint_url = endpoint_url.or(config.aws.endpoint_url);

            let outcome = invoke_once(config).await;
            if outcome.is_success() {
                info!("Invocation {}", outcome.status);
            } else {
                error!("Invocation {}", outcome.status);
            }
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
