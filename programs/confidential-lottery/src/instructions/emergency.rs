use anchor_lang::prelude::*;

use crate::state::Lottery;

#[derive(Accounts)]
pub struct EmergencyControl<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,
}

/// Halt ticket sales without touching the draw state
pub fn stop_handler(ctx: Context<EmergencyControl>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.assert_owner(&ctx.accounts.owner.key())?;

    lottery.is_buying_open = false;
    msg!("Ticket sales stopped for round {}", lottery.current_round);
    Ok(())
}

/// Resume ticket sales after an emergency stop
pub fn reopen_handler(ctx: Context<EmergencyControl>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.assert_owner(&ctx.accounts.owner.key())?;

    lottery.is_buying_open = true;
    msg!("Ticket sales reopened for round {}", lottery.current_round);
    Ok(())
}
