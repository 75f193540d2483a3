use clap::Parser;
use std::path::PathBuf;

/// Reports unencrypted EBS volumes together with the instance each one is
/// attached to and that instance's Name tag.
#[derive(Parser, Debug)]
#[command(name = "ebs-audit", version, about)]
pub struct Cli {
    /// AWS region to audit; defaults to the environment's region
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Write a CPU profile (flamegraph) of the run to this file
    #[arg(long, value_name = "FILE")]
    pub cpu_profile: Option<PathBuf>,
}
