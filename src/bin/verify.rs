//! Runs the ordered counter checks against the configured cluster.
//!
//! Needs a counter that has never been initialized for the configured keypair
//! (e.g. a fresh `solana-test-validator`).

use std::process::ExitCode;

use counter_client::infra::logging;
use counter_client::{ClientConfig, RpcCounterProgram, VerificationRunner};

async fn run() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let program = RpcCounterProgram::connect(&config)?;

    let runner = VerificationRunner::new(&program);
    println!("> Verifying counter {}", runner.address());

    let passed = runner
        .run_all_reporting(|check| println!("  ok: {}", check))
        .await?;
    println!("> {} checks passed.", passed.len());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
