pub mod composite;
pub mod deposit;
pub mod escrow;
pub mod open;
pub mod withdrawal;

use crate::{
    common::error::{AppError, StoreError, WalletError},
    domain::{ids::MemberId, ledger::WalletStore, wallet::Wallet},
};

/// Loads the member's wallet, runs `f` on it and saves the result.
///
/// Nothing is written back when `f` fails.
pub(crate) fn with_wallet<S, F>(store: &mut S, member: MemberId, f: F) -> Result<(), AppError>
where
    S: WalletStore + ?Sized,
    F: FnOnce(&mut Wallet) -> Result<(), WalletError>,
{
    let mut wallet = store
        .load(member)
        .ok_or(StoreError::WalletNotFound(member))?;
    f(&mut wallet)?;
    store.save(wallet)?;
    Ok(())
}
