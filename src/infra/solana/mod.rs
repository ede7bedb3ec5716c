pub mod client;
pub mod instructions;

pub use client::RpcCounterProgram;
