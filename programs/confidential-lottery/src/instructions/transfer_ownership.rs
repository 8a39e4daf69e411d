use anchor_lang::prelude::*;

use crate::events::OwnershipTransferred;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.assert_owner(&ctx.accounts.owner.key())?;

    let previous_owner = lottery.owner;
    lottery.owner = new_owner;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    msg!("Ownership transferred from {} to {}", previous_owner, new_owner);
    Ok(())
}
