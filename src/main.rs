use clap::Parser;
use hostinfo_rs::{HostIdentityBuilder, IdentityConfig, IdentityRequest, Strategy, emit};
use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, error};

#[derive(Parser, Debug)]
#[command(name = "hostinfo")]
#[command(about = "Report this host's hostname, FQDNs and IP addresses as JSON", long_about = None)]
struct Args {
    /// Request words; `full` enables reverse DNS of every address
    tokens: Vec<String>,

    #[arg(short, long, default_value = "8")]
    threads: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Auto)]
    strategy: Strategy,

    #[arg(long, default_value = "127.0.1.1")]
    fqdn_probe: IpAddr,

    /// Report an empty address list instead of trying external tools
    #[arg(long)]
    no_fallback: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = Arc::new(IdentityConfig {
        max_threads: args.threads,
        fqdn_probe: args.fqdn_probe,
        strategy: args.strategy,
        fallback_on_empty: !args.no_fallback,
        ..Default::default()
    });

    let builder = HostIdentityBuilder::from_config(config);
    let request = IdentityRequest::from_tokens(&args.tokens);

    let result = match builder.build(request).await {
        Ok(identity) => emit::write_json(&mut std::io::stdout().lock(), &identity),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
