use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use navmesh_cli::config::Config;
use navmesh_cli::{run, Args};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the report
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::from_env()?;
    init_tracing(args.json_logs || cfg.log_json);
    info!(core_version = %navmesh_core::version(), mesh = ?args.mesh, "starting navmesh-cli");

    let report = run(&args, &cfg)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
