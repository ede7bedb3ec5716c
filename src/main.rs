//! `counter` entrypoint: `counter [demo|init]`.

use std::process::ExitCode;

use counter_client::infra::logging;
use counter_client::{run_demo, run_init, ClientConfig, RpcCounterProgram};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Demo,
    Init,
}

impl Command {
    /// `None` for anything that is not a known command (usage is printed instead).
    fn parse(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("demo") => Some(Command::Demo),
            Some("init") => Some(Command::Init),
            Some(_) => None,
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  counter [demo|init]");
    println!();
    println!("  demo (default) - run the full demo");
    println!("  init           - only initialize the counter");
    println!();
    println!("Requires env vars: SOLANA_RPC_URL, SOLANA_PROGRAM_ID");
    println!("Optional: SOLANA_KEYPAIR_PATH (default ~/.config/solana/id.json), SOLANA_COMMITMENT");
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let program = RpcCounterProgram::connect(&config)?;

    match command {
        Command::Demo => {
            run_demo(&program).await?;
        }
        Command::Init => {
            run_init(&program).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let arg = std::env::args().nth(1);
    let Some(command) = Command::parse(arg.as_deref()) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_is_the_default() {
        assert_eq!(Command::parse(None), Some(Command::Demo));
        assert_eq!(Command::parse(Some("demo")), Some(Command::Demo));
        assert_eq!(Command::parse(Some("init")), Some(Command::Init));
        assert_eq!(Command::parse(Some("reset")), None);
    }
}
