use tracing::debug;

use crate::{
    common::error::AppError,
    domain::{ids::MemberId, ledger::WalletStore, wallet::Wallet},
};

pub fn handle<S: WalletStore + ?Sized>(store: &mut S, member: MemberId) -> Result<(), AppError> {
    let wallet = Wallet::create(member);
    let id = wallet.id();
    store.insert(wallet)?;
    debug!(%member, wallet = %id, "wallet opened");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::error::StoreError,
        domain::{balance::AssetBalance, ledger::InMemoryWalletStore},
    };

    #[test]
    fn opens_empty_wallet() {
        let mut store = InMemoryWalletStore::new();
        handle(&mut store, MemberId::new(1)).unwrap();

        let w = store.load(MemberId::new(1)).expect("wallet opened");
        assert_eq!(*w.money(), AssetBalance::init());
        assert_eq!(*w.point(), AssetBalance::init());
    }

    #[test]
    fn second_open_for_same_member_is_rejected_and_keeps_first_wallet() {
        let mut store = InMemoryWalletStore::new();
        handle(&mut store, MemberId::new(1)).unwrap();
        store.get_mut(MemberId::new(1)).unwrap().deposit_money(10).unwrap();

        let err = handle(&mut store, MemberId::new(1)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Store(StoreError::DuplicateOwner(m)) if m == MemberId::new(1)
        ));
        assert_eq!(store.load(MemberId::new(1)).unwrap().money_balance(), 10);
    }
}
