mod audit;
mod cli;
mod error;
mod inventory;
mod model;
mod pipeline;
mod profile;
mod render;
mod sort;

use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::AuditError;
use crate::inventory::ec2::Ec2Inventory;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries only the table; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let profiler = match cli.cpu_profile.as_deref() {
        Some(path) => Some(profile::start(path)?),
        None => None,
    };

    // region flag overrides the environment's default chain
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = cli.region.clone() {
        loader = loader.region(Region::new(region));
    }
    let conf = loader.load().await;
    if conf.region().is_none() {
        return Err(AuditError::Session(
            "no AWS region configured; pass --region or set AWS_REGION".into(),
        )
        .into());
    }

    let inventory = Ec2Inventory::new(&conf);
    let rows = audit::run_audit(&inventory).await?;

    println!("{}", render::build_table(rows));

    if let Some(profiler) = profiler {
        profiler.finish()?;
    }
    Ok(())
}
