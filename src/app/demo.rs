//! The interactive counter demonstration.
//!
//! Makes sure the caller's counter exists, bumps it a few times and prints every step.

use solana_program::pubkey::Pubkey;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::Signature;

use crate::domain::counter::{CounterAccount, CounterError, CounterProgram};

/// Number of increments performed by one demo run.
pub const DEMO_INCREMENTS: u32 = 3;

const RULE: &str = "------------------------------";

/// Formats lamports as SOL with four decimals.
pub fn format_sol(lamports: u64) -> String {
    format!("{:.4}", lamports as f64 / LAMPORTS_PER_SOL as f64)
}

/// Runs the full demo: balance, address, init-if-missing, then `DEMO_INCREMENTS` increments.
///
/// Returns the counter as fetched after the last increment.
pub async fn run_demo<P>(program: &P) -> Result<CounterAccount, CounterError>
where
    P: CounterProgram + ?Sized,
{
    println!("> Starting counter demo...");
    println!("> User: {}", program.identity());

    let balance = program.balance().await?;
    println!("> Balance: {} SOL", format_sol(balance));
    println!("{}", RULE);

    let address = program.counter_address();
    println!("> Counter PDA: {}", address);

    match program.fetch_counter(&address).await {
        Ok(_) => println!("> Counter account already exists."),
        Err(e) if e.is_not_found() => {
            println!("> Counter account does not exist, initializing...");
            let signature = program.initialize(&address).await?;
            println!("> Counter initialized. Transaction: {}", signature);
        }
        Err(e) => return Err(e),
    }
    println!("{}", RULE);

    let mut counter = program.fetch_counter(&address).await?;
    println!("> Current count: {}", counter.count);
    println!("> Authority: {}", counter.authority);
    println!("{}", RULE);

    println!("> Incrementing counter...");
    for round in 1..=DEMO_INCREMENTS {
        println!("> Increment {} of {}...", round, DEMO_INCREMENTS);
        let signature = program.increment(&address).await?;
        println!("> Increment transaction: {}", signature);

        counter = program.fetch_counter(&address).await?;
        println!("> New count: {}", counter.count);
        println!("{}", RULE);
    }

    println!("> Demo complete.");
    println!("> Final count: {}", counter.count);
    Ok(counter)
}

/// Initializes the caller's counter without checking whether it exists first.
pub async fn run_init<P>(program: &P) -> Result<(Pubkey, Signature), CounterError>
where
    P: CounterProgram + ?Sized,
{
    println!("> Initializing counter only...");
    let address = program.counter_address();
    let signature = program.initialize(&address).await?;
    println!("> Initialized {}. Transaction: {}", address, signature);
    Ok((address, signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_balance_in_sol() {
        assert_eq!(format_sol(0), "0.0000");
        assert_eq!(format_sol(LAMPORTS_PER_SOL), "1.0000");
        assert_eq!(format_sol(2_500_000_000), "2.5000");
        assert_eq!(format_sol(123_456), "0.0001");
    }
}
