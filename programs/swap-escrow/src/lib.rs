#![allow(unexpected_cfgs, deprecated)]

use anchor_lang::prelude::*;

mod errors;
mod instructions;
pub mod state;

use instructions::*;

declare_id!("33333333333333333333333333333333333333333333");

#[program]
pub mod swap_escrow {
    use super::*;

    /// Create a new escrow: maker locks `deposit` of token A and asks for
    /// `receive` of token B in return.
    pub fn make(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, deposit, receive)
    }

    /// Settle the escrow: taker pays token B to the maker and drains the vault.
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Cancel the escrow: maker reclaims the deposited token A.
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
