use std::collections::{HashMap, hash_map::Entry};

use crate::{
    common::error::StoreError,
    domain::{ids::MemberId, wallet::Wallet},
};

/// Durable home of wallets, keyed by owner.
///
/// Implementations must keep at most one wallet per member and must hand back exactly
/// the balances they were given.
pub trait WalletStore {
    /// Adds a new wallet. Fails if the owner already has one.
    fn insert(&mut self, wallet: Wallet) -> Result<(), StoreError>;

    fn load(&self, owner: MemberId) -> Option<Wallet>;

    /// Overwrites the stored state of an existing wallet.
    fn save(&mut self, wallet: Wallet) -> Result<(), StoreError>;

    /// All stored wallets, sorted by owner.
    fn wallets(&self) -> Vec<Wallet>;
}

#[derive(Debug, Default)]
pub struct InMemoryWalletStore {
    wallets: HashMap<MemberId, Wallet>,
}

impl InMemoryWalletStore {
    pub fn new() -> Self {
        Self {
            wallets: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Borrow a stored wallet for in-place mutation.
    pub fn get_mut(&mut self, owner: MemberId) -> Option<&mut Wallet> {
        self.wallets.get_mut(&owner)
    }
}

impl WalletStore for InMemoryWalletStore {
    fn insert(&mut self, wallet: Wallet) -> Result<(), StoreError> {
        match self.wallets.entry(wallet.owner()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateOwner(wallet.owner())),
            Entry::Vacant(slot) => {
                slot.insert(wallet);
                Ok(())
            }
        }
    }

    fn load(&self, owner: MemberId) -> Option<Wallet> {
        self.wallets.get(&owner).cloned()
    }

    fn save(&mut self, wallet: Wallet) -> Result<(), StoreError> {
        match self.wallets.get_mut(&wallet.owner()) {
            // a different wallet id under the same owner would break one-per-member
            Some(existing) if existing.id() == wallet.id() => {
                *existing = wallet;
                Ok(())
            }
            Some(_) => Err(StoreError::DuplicateOwner(wallet.owner())),
            None => Err(StoreError::WalletNotFound(wallet.owner())),
        }
    }

    fn wallets(&self) -> Vec<Wallet> {
        let mut all: Vec<Wallet> = self.wallets.values().cloned().collect();
        all.sort_unstable_by_key(|w| w.owner());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_second_wallet_for_same_owner() {
        let mut store = InMemoryWalletStore::new();
        let owner = MemberId::new(1);
        store.insert(Wallet::create(owner)).unwrap();

        let err = store.insert(Wallet::create(owner)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateOwner(owner));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_then_load_preserves_balances() {
        let mut store = InMemoryWalletStore::default();
        let owner = MemberId::new(5);
        store.insert(Wallet::create(owner)).unwrap();

        let mut w = store.load(owner).expect("wallet exists");
        w.deposit_money(300).unwrap();
        w.move_money_to_escrow(120).unwrap();
        store.save(w.clone()).unwrap();

        let loaded = store.load(owner).unwrap();
        assert_eq!(loaded, w);
        assert_eq!((loaded.money_balance(), loaded.money_escrow()), (180, 120));
    }

    #[test]
    fn save_unknown_owner_fails() {
        let mut store = InMemoryWalletStore::new();
        let w = Wallet::create(MemberId::new(8));
        assert_eq!(
            store.save(w),
            Err(StoreError::WalletNotFound(MemberId::new(8)))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn save_with_foreign_wallet_id_is_rejected() {
        let mut store = InMemoryWalletStore::new();
        let owner = MemberId::new(2);
        store.insert(Wallet::create(owner)).unwrap();

        let imposter = Wallet::create(owner);
        assert_eq!(store.save(imposter), Err(StoreError::DuplicateOwner(owner)));
    }

    #[test]
    fn wallets_are_listed_in_owner_order() {
        let mut store = InMemoryWalletStore::new();
        for id in [30, 10, 20] {
            store.insert(Wallet::create(MemberId::new(id))).unwrap();
        }
        let owners: Vec<u64> = store.wallets().iter().map(|w| w.owner().as_u64()).collect();
        assert_eq!(owners, vec![10, 20, 30]);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut store = InMemoryWalletStore::new();
        let owner = MemberId::new(4);
        store.insert(Wallet::create(owner)).unwrap();

        store.get_mut(owner).unwrap().deposit_point(9).unwrap();
        assert_eq!(store.load(owner).unwrap().point_balance(), 9);
        assert!(store.get_mut(MemberId::new(99)).is_none());
    }
}
