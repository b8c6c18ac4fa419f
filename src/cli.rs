use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Academic calendar and leave accounting service.
#[derive(Parser)]
#[command(
    name = "leave-ledger",
    version,
    about = "Serve working-day, period-start and leave-summary queries"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding institution.yaml, batches.yaml and exception_days.yaml.
    #[arg(short, long, default_value = "config/institution")]
    pub config: PathBuf,

    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,
}
