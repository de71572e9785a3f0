//! # DNS Dispatch
//!
//! Command line client: forward and reverse lookups through a loopback UDP
//! resolver or a DNS-over-HTTPS endpoint.

mod bootstrap;
mod di;

use clap::{Parser, Subcommand, ValueEnum};
use dns_dispatch_application::ports::ResolvedRecords;
use dns_dispatch_domain::{CliOverrides, Timeout};

#[derive(Parser)]
#[command(name = "dns-dispatch")]
#[command(version)]
#[command(about = "Resolve names over a local UDP resolver or DNS-over-HTTPS")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level or filter directive (e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// DoH endpoint for the remote transport
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TransportArg {
    /// UDP to the loopback resolver
    Local,
    /// DNS-over-HTTPS to the configured endpoint
    Remote,
}

#[derive(Subcommand)]
enum Command {
    /// Forward lookup (A, plus AAAA with --ipv6)
    Resolve {
        /// Domain name or URL
        domain: String,

        #[arg(short, long, value_enum, default_value_t = TransportArg::Local)]
        transport: TransportArg,

        /// Also query AAAA records
        #[arg(long)]
        ipv6: bool,

        /// Port of the loopback resolver
        #[arg(short, long)]
        port: Option<u16>,

        /// Query timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Reverse (PTR) lookup
    Reverse {
        /// IPv4 or IPv6 address
        ip: String,

        #[arg(short, long, value_enum, default_value_t = TransportArg::Local)]
        transport: TransportArg,

        /// Port of the loopback resolver
        #[arg(short, long)]
        port: Option<u16>,

        /// Query timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

impl Command {
    fn port(&self) -> Option<u16> {
        match self {
            Command::Resolve { port, .. } | Command::Reverse { port, .. } => *port,
        }
    }

    fn timeout(&self) -> Option<u64> {
        match self {
            Command::Resolve { timeout, .. } | Command::Reverse { timeout, .. } => *timeout,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        local_port: cli.command.port(),
        remote_endpoint: cli.endpoint.clone(),
        timeout_secs: cli.command.timeout(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let dispatcher = di::build_dispatcher(&config);
    let port = config.local.port;
    let timeout = cli.command.timeout().map(Timeout::from_secs);

    let result = match &cli.command {
        Command::Resolve {
            domain,
            transport: TransportArg::Local,
            ipv6,
            ..
        } => {
            dispatcher
                .resolve_domain_via_local_transport(domain, *ipv6, port, timeout)
                .await?
        }
        Command::Resolve {
            domain,
            transport: TransportArg::Remote,
            ipv6,
            ..
        } => {
            dispatcher
                .resolve_domain_via_remote_transport(domain, *ipv6, timeout)
                .await?
        }
        Command::Reverse {
            ip,
            transport: TransportArg::Local,
            ..
        } => {
            dispatcher
                .reverse_resolve_via_local_transport(ip, port, timeout)
                .await?
        }
        Command::Reverse {
            ip,
            transport: TransportArg::Remote,
            ..
        } => {
            dispatcher
                .reverse_resolve_via_remote_transport(ip, timeout)
                .await?
        }
    };

    print_records(&result);
    Ok(())
}

fn print_records(result: &ResolvedRecords) {
    match result {
        Some(records) if !records.is_empty() => {
            for record in records {
                println!("{}", record);
            }
        }
        _ => println!("no records"),
    }
}
