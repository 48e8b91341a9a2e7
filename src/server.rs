use clap::Parser;
use hostinfo_rs::{HostIdentityBuilder, IdentityConfig, Strategy, http};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(name = "hostinfo-server")]
#[command(about = "Serve this host's network identity as JSON over HTTP", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    #[arg(short, long, default_value = "8")]
    threads: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Auto)]
    strategy: Strategy,

    #[arg(long, default_value = "127.0.1.1")]
    fqdn_probe: IpAddr,

    #[arg(long)]
    no_fallback: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = Arc::new(IdentityConfig {
        max_threads: args.threads,
        fqdn_probe: args.fqdn_probe,
        strategy: args.strategy,
        fallback_on_empty: !args.no_fallback,
        ..Default::default()
    });

    info!("Starting host identity server");
    let builder = Arc::new(HostIdentityBuilder::from_config(config));
    http::serve(&args.listen, builder).await?;

    Ok(())
}
