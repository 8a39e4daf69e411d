#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("BoGG6xcmbV8HpsEA2qHs6pNUS5h5SfmNRvekf2g17QjC");

#[program]
pub mod confidential_lottery {
    use super::*;

    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        lottery_id: u64,
        ticket_price: u64,
        automation: Pubkey,
    ) -> Result<()> {
        instructions::initialize_lottery::handler(ctx, lottery_id, ticket_price, automation)
    }

    pub fn buy_ticket<'info>(
        ctx: Context<'_, '_, '_, 'info, BuyTicket<'info>>,
        payment: u64,
        encrypted_numbers: Vec<Vec<u8>>,
    ) -> Result<()> {
        instructions::buy_ticket::handler(ctx, payment, encrypted_numbers)
    }

    /// Draw the encrypted winning set for the current round. Owner or
    /// automation only; at most once per round.
    pub fn draw_numbers<'info>(ctx: Context<'_, '_, '_, 'info, DrawNumbers<'info>>) -> Result<()> {
        instructions::draw_numbers::handler(ctx)
    }

    /// Evaluate a ticket against the winning set (encrypted match count and
    /// prize level)
    pub fn check_ticket<'info>(ctx: Context<'_, '_, '_, 'info, CheckTicket<'info>>) -> Result<()> {
        instructions::check_ticket::handler(ctx)
    }

    pub fn allow_winning_numbers_access<'info>(
        ctx: Context<'_, '_, '_, 'info, AllowWinningNumbersAccess<'info>>,
        viewer: Pubkey,
    ) -> Result<()> {
        instructions::allow_winning_numbers::handler(ctx, viewer)
    }

    /// Finalize a ticket's settlement level from an attested decryption of
    /// its stored prize_tier handle
    pub fn register_winner(
        ctx: Context<RegisterWinner>,
        prize_level: u8,
        handle: Vec<u8>,
        plaintext: Vec<u8>,
    ) -> Result<()> {
        instructions::register_winner::handler(ctx, prize_level, handle, plaintext)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>) -> Result<()> {
        instructions::claim_prize::handler(ctx)
    }

    pub fn reset(ctx: Context<ResetRound>) -> Result<()> {
        instructions::reset_round::handler(ctx)
    }

    pub fn emergency_stop_buying(ctx: Context<EmergencyControl>) -> Result<()> {
        instructions::emergency::stop_handler(ctx)
    }

    pub fn emergency_reopen_buying(ctx: Context<EmergencyControl>) -> Result<()> {
        instructions::emergency::reopen_handler(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }
}
