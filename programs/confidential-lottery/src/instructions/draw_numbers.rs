use anchor_lang::prelude::*;
use inco_lightning::{
    cpi::{self, e_add, e_rand, e_rem},
    program::IncoLightning,
    types::Euint128,
    ID as INCO_LIGHTNING_ID,
};

use crate::constants::{BONUS_NUMBER_RANGE, BONUS_NUMBERS, MAIN_NUMBER_RANGE, MAIN_NUMBERS};
use crate::error::LotteryError;
use crate::events::NumbersDrawn;
use crate::instructions::op_ctx;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct DrawNumbers<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    pub system_program: Program<'info, System>,

    #[account(address = INCO_LIGHTNING_ID)]
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

/// Generate the encrypted winning set for the current round. Each number
/// mixes MPC randomness with a slot/time/nonce seed so no single source
/// controls the outcome. Duplicate main numbers are permitted.
pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, DrawNumbers<'info>>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    require!(
        lottery.is_authorized_drawer(&ctx.accounts.authority.key()),
        LotteryError::NotAuthorized
    );
    require!(!lottery.has_drawn, LotteryError::AlreadyDrawn);

    let inco = ctx.accounts.inco_lightning_program.to_account_info();
    let signer = ctx.accounts.authority.to_account_info();

    let clock = Clock::get()?;
    let base_seed = (clock.slot ^ clock.unix_timestamp as u64) as u128;
    let nonce = lottery.draw_nonce as u128;

    for i in 0..MAIN_NUMBERS {
        lottery.winning_main[i] = draw_one(
            &inco,
            &signer,
            base_seed.wrapping_add(nonce.wrapping_mul(31).wrapping_add(i as u128)),
            MAIN_NUMBER_RANGE,
        )?;
    }
    for i in 0..BONUS_NUMBERS {
        lottery.winning_bonus[i] = draw_one(
            &inco,
            &signer,
            base_seed.wrapping_add(nonce.wrapping_mul(31).wrapping_add((MAIN_NUMBERS + i) as u128)),
            BONUS_NUMBER_RANGE,
        )?;
    }

    lottery.draw_nonce += 1;
    lottery.has_drawn = true;

    emit!(NumbersDrawn {
        round: lottery.current_round,
    });

    msg!("Winning numbers drawn for round {}", lottery.current_round);
    msg!("   (Encrypted - nobody knows them, not even the owner)");
    Ok(())
}

/// One bounded encrypted draw: (e_rand + seed) % range
fn draw_one<'info>(
    inco: &AccountInfo<'info>,
    signer: &AccountInfo<'info>,
    seed: u128,
    range: u128,
) -> Result<Euint128> {
    let random: Euint128 = e_rand(op_ctx(inco, signer), 0)?;
    let seed_enc: Euint128 = cpi::as_euint128(op_ctx(inco, signer), seed)?;
    let mixed: Euint128 = e_add(op_ctx(inco, signer), random, seed_enc, 0)?;
    let range_enc: Euint128 = cpi::as_euint128(op_ctx(inco, signer), range)?;
    e_rem(op_ctx(inco, signer), mixed, range_enc, 0)
}
