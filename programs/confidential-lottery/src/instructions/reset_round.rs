use anchor_lang::prelude::*;

use crate::events::RoundReset;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct ResetRound<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,
}

/// Start the next round. Whatever was not paid out rolls into the
/// accumulated pool; winner counts and the winning set are cleared and
/// buying reopens. No funds are created or destroyed.
pub fn handler(ctx: Context<ResetRound>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.assert_owner(&ctx.accounts.owner.key())?;

    let rolled_over = lottery.advance_round();

    emit!(RoundReset {
        round: lottery.current_round,
        rolled_over,
    });

    msg!("Round reset to #{}", lottery.current_round);
    msg!("   Rolled over: {} lamports", rolled_over);
    msg!(
        "   Accumulated pool: {} lamports",
        lottery.accumulated_prize_pool
    );
    Ok(())
}
