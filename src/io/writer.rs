use std::io::Write;

use crate::domain::{snapshot::WalletSnapshot, wallet::Wallet};

#[derive(serde::Serialize)]
/// Internal CSV output row for the balance report.
///
/// Headers written (in this order):
/// `member,money_available,money_escrow,money_total,point_available,point_escrow,point_total`.
struct BalanceRow {
    member: u64,
    money_available: i64,
    money_escrow: i64,
    money_total: i64,
    point_available: i64,
    point_escrow: i64,
    point_total: i64,
}

impl From<&Wallet> for BalanceRow {
    fn from(w: &Wallet) -> Self {
        Self {
            member: w.owner().as_u64(),
            money_available: w.money_balance(),
            money_escrow: w.money_escrow(),
            money_total: w.total_money(),
            point_available: w.point_balance(),
            point_escrow: w.point_escrow(),
            point_total: w.total_point(),
        }
    }
}

/// Writes the balance report for `wallets` to a CSV writer.
///
/// Rows are sorted by member id ascending regardless of input order.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use escrow_wallet::domain::{ids::MemberId, wallet::Wallet};
/// use escrow_wallet::io::writer::write_balances;
///
/// let mut w = Wallet::create(MemberId::new(1));
/// w.deposit_money(100).unwrap();
///
/// let mut out = Vec::new();
/// write_balances(&mut out, &[w]).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("member,money_available,money_escrow,money_total,"));
/// assert!(s.contains("\n1,100,0,100,0,0,0\n"));
/// ```
pub fn write_balances<W: Write>(writer: W, wallets: &[Wallet]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut rows: Vec<BalanceRow> = wallets.iter().map(BalanceRow::from).collect();
    rows.sort_unstable_by_key(|r| r.member);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes full wallet state (including wallet ids) so it can be loaded back with
/// [`crate::io::reader::read_snapshots`].
pub fn write_snapshots<W: Write>(writer: W, wallets: &[Wallet]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut snapshots: Vec<WalletSnapshot> = wallets.iter().map(WalletSnapshot::from).collect();
    snapshots.sort_unstable_by_key(|s| s.member);

    for snapshot in snapshots {
        wtr.serialize(snapshot)?;
    }

    wtr.flush()?;
    Ok(())
}
