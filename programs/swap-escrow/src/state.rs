use anchor_lang::prelude::*;

/// One outstanding offer. Created by `make`, closed by exactly one of
/// `take` or `refund`; a settled or cancelled offer exists only as the
/// absence of this account.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    /// Maker-chosen value that, with the maker key, derives this PDA.
    /// Lets one maker run several escrows concurrently.
    pub seed: u64,
    /// Creator of the offer; the only identity allowed to refund.
    pub maker: Pubkey,
    /// Mint of the deposited token.
    pub mint_a: Pubkey,
    /// Mint the maker wants in exchange.
    pub mint_b: Pubkey,
    /// Amount of token A locked in the vault, fixed at creation.
    pub deposit: u64,
    /// Amount of token B the maker requires, fixed at creation.
    pub receive: u64,
    /// Cached bump so later instructions can sign as this PDA without
    /// re-deriving.
    pub bump: u8,
}
