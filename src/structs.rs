use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to read.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// PEM bundle to audit instead of the configured or embedded one.
    #[arg(long)]
    pub bundle: Option<String>,
    /// Months the certificates must remain valid.
    #[arg(long)]
    pub fail_months: Option<u32>,
    /// Months ahead at which an upcoming expiry is reported.
    #[arg(long)]
    pub warn_months: Option<u32>,
    /// Print the audit report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
    /// Only resolve and report the process trust anchors, skip the audit.
    #[arg(long)]
    pub trust_only: bool,
    /// Write the embedded PEM bundle to this file and exit.
    #[arg(long)]
    pub export: Option<String>
}
