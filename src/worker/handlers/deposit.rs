use tracing::debug;

use crate::{
    common::error::AppError,
    domain::{ids::MemberId, ledger::WalletStore, wallet::Asset},
};

pub fn handle<S: WalletStore + ?Sized>(
    store: &mut S,
    member: MemberId,
    asset: Asset,
    amount: i64,
) -> Result<(), AppError> {
    super::with_wallet(store, member, |w| match asset {
        Asset::Money => w.deposit_money(amount),
        Asset::Point => w.deposit_point(amount),
    })?;
    debug!(%member, %asset, amount, "deposit applied");
    Ok(())
}
