use tracing::debug;

use crate::{
    common::error::AppError,
    domain::{balance::BalanceOp, ids::MemberId, ledger::WalletStore, wallet::Asset},
};

/// Reserve, release or settle funds on one ledger.
pub fn handle<S: WalletStore + ?Sized>(
    store: &mut S,
    member: MemberId,
    asset: Asset,
    op: BalanceOp,
    amount: i64,
) -> Result<(), AppError> {
    super::with_wallet(store, member, |w| match (asset, op) {
        (Asset::Money, BalanceOp::MoveToEscrow) => w.move_money_to_escrow(amount),
        (Asset::Money, BalanceOp::ReleaseEscrow) => w.release_money_escrow(amount),
        (Asset::Money, BalanceOp::DeductEscrow) => w.deduct_money_escrow(amount),
        (Asset::Point, BalanceOp::MoveToEscrow) => w.move_point_to_escrow(amount),
        (Asset::Point, BalanceOp::ReleaseEscrow) => w.release_point_escrow(amount),
        (Asset::Point, BalanceOp::DeductEscrow) => w.deduct_point_escrow(amount),
        (asset, op) => w.apply(asset, op, amount),
    })?;
    debug!(%member, %asset, %op, amount, "escrow operation applied");
    Ok(())
}
