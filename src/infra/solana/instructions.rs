// Instruction builders for the counter program.

use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::crypto::hashing::instruction_discriminator;

pub const INITIALIZE: &str = "initialize";
pub const INCREMENT: &str = "increment";

/// `initialize`: counter (writable), user (writable signer, pays rent), system program.
pub fn initialize(program_id: &Pubkey, counter: &Pubkey, user: &Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*counter, false),
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(solana_program::system_program::ID, false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_discriminator(INITIALIZE).to_vec(),
    }
}

/// `increment`: counter (writable), user (signer).
pub fn increment(program_id: &Pubkey, counter: &Pubkey, user: &Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*counter, false),
        AccountMeta::new_readonly(*user, true),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_discriminator(INCREMENT).to_vec(),
    }
}
