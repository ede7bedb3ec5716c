pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;

// Convenience re-exports (keeps call-sites clean)
pub use app::demo::{run_demo, run_init};
pub use app::verify::{VerificationError, VerificationRunner};
pub use domain::counter::{counter_address, CounterAccount, CounterError, CounterProgram};
pub use infra::config::ClientConfig;
pub use infra::solana::RpcCounterProgram;
