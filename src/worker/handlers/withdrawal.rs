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
        Asset::Money => w.withdraw_money(amount),
        Asset::Point => w.withdraw_point(amount),
    })?;
    debug!(%member, %asset, amount, "withdrawal applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::error::WalletError,
        domain::{ledger::InMemoryWalletStore, wallet::Wallet},
    };

    fn seeded_store(member: u64, money: i64, point: i64) -> InMemoryWalletStore {
        let mut w = Wallet::create(MemberId::new(member));
        w.deposit_money(money).unwrap();
        w.deposit_point(point).unwrap();
        let mut store = InMemoryWalletStore::new();
        store.insert(w).unwrap();
        store
    }

    #[test]
    fn withdrawal_decreases_available_when_sufficient_funds() {
        let mut store = seeded_store(1, 100, 50);
        handle(&mut store, MemberId::new(1), Asset::Money, 40).unwrap();

        let w = store.load(MemberId::new(1)).unwrap();
        assert_eq!(w.money_balance(), 60);
        assert_eq!(w.point_balance(), 50);
    }

    #[test]
    fn overdraft_is_rejected_and_balance_kept() {
        let mut store = seeded_store(2, 30, 30);
        let err = handle(&mut store, MemberId::new(2), Asset::Point, 50).unwrap_err();
        assert!(matches!(
            err,
            AppError::Wallet(WalletError::InsufficientBalance {
                required: 50,
                available: 30
            })
        ));

        let w = store.load(MemberId::new(2)).unwrap();
        assert_eq!(w.point_balance(), 30, "available should not go negative");
    }

    #[test]
    fn escrowed_funds_cannot_be_withdrawn() {
        let mut store = seeded_store(3, 100, 1);
        store
            .get_mut(MemberId::new(3))
            .unwrap()
            .move_money_to_escrow(80)
            .unwrap();

        assert!(handle(&mut store, MemberId::new(3), Asset::Money, 21).is_err());
        handle(&mut store, MemberId::new(3), Asset::Money, 20).unwrap();

        let w = store.load(MemberId::new(3)).unwrap();
        assert_eq!((w.money_balance(), w.money_escrow()), (0, 80));
    }
}
