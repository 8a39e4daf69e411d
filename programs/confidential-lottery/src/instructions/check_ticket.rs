use anchor_lang::prelude::*;
use inco_lightning::{
    cpi::{self, accounts::Allow, e_add, e_eq, e_select},
    program::IncoLightning,
    types::{Ebool, Euint128},
    ID as INCO_LIGHTNING_ID,
};

use crate::constants::{BONUS_NUMBERS, MAIN_NUMBERS, TIER_BRACKET_BASE};
use crate::error::LotteryError;
use crate::instructions::op_ctx;
use crate::state::{Lottery, Ticket};

#[derive(Accounts)]
pub struct CheckTicket<'info> {
    #[account(mut)]
    pub checker: Signer<'info>,

    pub lottery: Account<'info, Lottery>,

    #[account(mut, has_one = lottery)]
    pub ticket: Account<'info, Ticket>,

    pub system_program: Program<'info, System>,

    #[account(address = INCO_LIGHTNING_ID)]
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

/// Score a ticket against the winning set without decrypting anything.
/// Match counts are folded homomorphically; the prize level comes from a
/// nested conditional select over the payout table. Remaining accounts
/// (optional): 2 allowance PDAs plus the player's allowed-address account,
/// to let the player decrypt the two results.
pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, CheckTicket<'info>>) -> Result<()> {
    let lottery = &ctx.accounts.lottery;
    let ticket = &mut ctx.accounts.ticket;

    require!(lottery.has_drawn, LotteryError::NotDrawnYet);
    require!(ticket.round == lottery.current_round, LotteryError::WrongRound);
    require!(!ticket.checked, LotteryError::AlreadyChecked);

    let inco = ctx.accounts.inco_lightning_program.to_account_info();
    let signer = ctx.accounts.checker.to_account_info();

    let zero: Euint128 = cpi::as_euint128(op_ctx(&inco, &signer), 0u128)?;
    let one: Euint128 = cpi::as_euint128(op_ctx(&inco, &signer), 1u128)?;

    // Every main selection against every winning main number (0..5 hits)
    let mut main_matches = zero;
    for i in 0..MAIN_NUMBERS {
        for j in 0..MAIN_NUMBERS {
            let hit: Ebool = e_eq(
                op_ctx(&inco, &signer),
                ticket.numbers[i],
                lottery.winning_main[j],
                0,
            )?;
            let inc: Euint128 = e_select(op_ctx(&inco, &signer), hit, one, zero, 0)?;
            main_matches = e_add(op_ctx(&inco, &signer), main_matches, inc, 0)?;
        }
    }

    // Bonus selections against the winning bonus pair (0..2 hits)
    let mut bonus_matches = zero;
    for i in 0..BONUS_NUMBERS {
        for j in 0..BONUS_NUMBERS {
            let hit: Ebool = e_eq(
                op_ctx(&inco, &signer),
                ticket.numbers[MAIN_NUMBERS + i],
                lottery.winning_bonus[j],
                0,
            )?;
            let inc: Euint128 = e_select(op_ctx(&inco, &signer), hit, one, zero, 0)?;
            bonus_matches = e_add(op_ctx(&inco, &signer), bonus_matches, inc, 0)?;
        }
    }

    let total_matches: Euint128 = e_add(op_ctx(&inco, &signer), main_matches, bonus_matches, 0)?;

    // Main matches gate the bracket; bonus matches pick the level inside it.
    // Brackets are mutually exclusive, so the select chain keeps exactly one.
    let bonus_two: Ebool = {
        let two = cpi::as_euint128(op_ctx(&inco, &signer), 2u128)?;
        e_eq(op_ctx(&inco, &signer), bonus_matches, two, 0)?
    };
    let bonus_one: Ebool = e_eq(op_ctx(&inco, &signer), bonus_matches, one, 0)?;

    let mut prize_tier = zero;
    for (bracket, &base) in TIER_BRACKET_BASE.iter().enumerate() {
        let main_needed = (MAIN_NUMBERS - bracket) as u128;
        let needed_enc = cpi::as_euint128(op_ctx(&inco, &signer), main_needed)?;
        let in_bracket: Ebool = e_eq(op_ctx(&inco, &signer), main_matches, needed_enc, 0)?;

        let level_top = cpi::as_euint128(op_ctx(&inco, &signer), base as u128)?;
        let level_mid = cpi::as_euint128(op_ctx(&inco, &signer), (base + 1) as u128)?;
        let level_low = cpi::as_euint128(op_ctx(&inco, &signer), (base + 2) as u128)?;

        let one_or_none: Euint128 =
            e_select(op_ctx(&inco, &signer), bonus_one, level_mid, level_low, 0)?;
        let bracket_level: Euint128 =
            e_select(op_ctx(&inco, &signer), bonus_two, level_top, one_or_none, 0)?;
        prize_tier = e_select(op_ctx(&inco, &signer), in_bracket, bracket_level, prize_tier, 0)?;
    }

    ticket.matches = total_matches;
    ticket.prize_tier = prize_tier;
    ticket.checked = true;

    // Allow the player to decrypt the two results
    if ctx.remaining_accounts.len() >= 3 {
        let allowed_address = &ctx.remaining_accounts[2];
        for (i, handle) in [total_matches, prize_tier].into_iter().enumerate() {
            let cpi_ctx = CpiContext::new(
                inco.clone(),
                Allow {
                    allowance_account: ctx.remaining_accounts[i].clone(),
                    signer: signer.clone(),
                    allowed_address: allowed_address.clone(),
                    system_program: ctx.accounts.system_program.to_account_info(),
                },
            );
            cpi::allow(cpi_ctx, handle.0, true, ticket.player)?;
        }
    }

    msg!("Ticket {} checked for round {}", ticket.id, ticket.round);
    msg!("   Matches handle: {}", total_matches.0);
    msg!("   Prize level handle: {}", prize_tier.0);
    Ok(())
}
