pub mod balance;
pub mod ids;
pub mod ledger;
pub mod snapshot;
pub mod wallet;
