use solana_program::pubkey::Pubkey;

/// Fixed seed of the per-user counter PDA.
pub const COUNTER_SEED: &[u8] = b"counter";

/// Derives the counter account owned by `authority`: seeds are `["counter", authority]`.
pub fn counter_address(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[COUNTER_SEED, authority.as_ref()], program_id)
}
