use solana_sdk::native_token::LAMPORTS_PER_SOL;

use counter_client::app::demo::format_sol;
use counter_client::infra::logging;
use counter_client::{run_init, ClientConfig, CounterProgram, RpcCounterProgram};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-if-missing]\n\
         \n\
         Requires env vars:\n\
           SOLANA_RPC_URL, SOLANA_PROGRAM_ID\n\
         And Solana payer key:\n\
           SOLANA_KEYPAIR_PATH (default ~/.config/solana/id.json)\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let init_if_missing = args.iter().any(|a| a == "--init-if-missing");

    // Force-read config (nice error messages if missing)
    let config = ClientConfig::from_env()?;

    println!("> Preflight:");
    println!("  SOLANA_RPC_URL={}", config.rpc_url);
    println!("  SOLANA_PROGRAM_ID={}", config.program_id);
    println!("  Keypair: {}", config.keypair_path.display());

    let program = RpcCounterProgram::connect(&config)?;
    let client = program.rpc();

    // Basic RPC connectivity
    let version = client.get_version().await?;
    println!("  RPC version: {}", version.solana_core);

    // Payer balance
    let balance_lamports = program.balance().await?;
    println!("  Payer: {}", program.identity());
    println!(
        "  Payer balance: {} lamports (~{} SOL)",
        balance_lamports,
        format_sol(balance_lamports)
    );
    if balance_lamports < LAMPORTS_PER_SOL / 100 {
        eprintln!("  Warning: payer balance looks low; transactions may fail.");
    }

    // Program account existence
    let program_acct = client.get_account(&config.program_id).await.map_err(|e| {
        anyhow::anyhow!(
            "Program account not found on cluster: {} ({})",
            config.program_id,
            e
        )
    })?;
    if !program_acct.executable {
        eprintln!("  Warning: program account exists but is not marked executable.");
    } else {
        println!("  Program account is deployed + executable.");
    }

    // Counter PDA existence
    let address = program.counter_address();
    println!("  Counter PDA: {}", address);

    match program.fetch_counter(&address).await {
        Ok(counter) => println!(
            "  Counter exists: count={} authority={}",
            counter.count, counter.authority
        ),
        Err(e) if e.is_not_found() && init_if_missing => {
            println!("  Counter missing -> initializing...");
            run_init(&program).await?;
            let counter = program
                .fetch_counter(&address)
                .await
                .map_err(|e| anyhow::anyhow!("Counter still missing after initialize: {}", e))?;
            println!("  Counter initialized (count={}).", counter.count);
        }
        Err(e) if e.is_not_found() => {
            println!("  Counter not initialized yet (run `counter init` or pass --init-if-missing).");
        }
        Err(e) => return Err(e.into()),
    }

    println!("> Preflight OK.");
    Ok(())
}
