use anchor_lang::prelude::*;
use inco_lightning::{
    cpi::{self, accounts::Allow},
    program::IncoLightning,
    ID as INCO_LIGHTNING_ID,
};

use crate::constants::{MAIN_NUMBERS, TOTAL_NUMBERS};
use crate::error::LotteryError;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct AllowWinningNumbersAccess<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub lottery: Account<'info, Lottery>,

    pub system_program: Program<'info, System>,

    #[account(address = INCO_LIGHTNING_ID)]
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

/// Grant `viewer` decryption access to the 7 winning handles. The winning
/// set is only ever readable through such a grant. Remaining accounts:
/// 7 allowance PDAs plus the viewer's allowed-address account.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, AllowWinningNumbersAccess<'info>>,
    viewer: Pubkey,
) -> Result<()> {
    let lottery = &ctx.accounts.lottery;
    require!(lottery.has_drawn, LotteryError::NotDrawnYet);
    require!(
        ctx.remaining_accounts.len() > TOTAL_NUMBERS,
        LotteryError::MissingAllowanceAccounts
    );

    let inco = ctx.accounts.inco_lightning_program.to_account_info();
    let signer = ctx.accounts.payer.to_account_info();
    let allowed_address = &ctx.remaining_accounts[TOTAL_NUMBERS];

    let handles = lottery
        .winning_main
        .iter()
        .chain(lottery.winning_bonus.iter());
    for (i, handle) in handles.enumerate() {
        let cpi_ctx = CpiContext::new(
            inco.clone(),
            Allow {
                allowance_account: ctx.remaining_accounts[i].clone(),
                signer: signer.clone(),
                allowed_address: allowed_address.clone(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
        );
        cpi::allow(cpi_ctx, handle.0, true, viewer)?;
    }

    msg!(
        "Allowed {} to decrypt the round {} winning set ({} main + {} bonus)",
        viewer,
        lottery.current_round,
        MAIN_NUMBERS,
        TOTAL_NUMBERS - MAIN_NUMBERS
    );
    Ok(())
}
