use std::io::Read;

use crate::{
    common::command::WalletCommand,
    domain::{
        balance::BalanceOp,
        ids::MemberId,
        snapshot::WalletSnapshot,
        wallet::{Asset, CompositeOp},
    },
};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Amount columns stay
/// empty when a command does not use them.
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    member: u64,
    money: Option<i64>,
    point: Option<i64>,
}

fn parse_single(kind: &str) -> Option<(BalanceOp, Asset)> {
    let (op, asset) = kind.split_once('_')?;
    let op = match op {
        "deposit" => BalanceOp::Deposit,
        "withdraw" => BalanceOp::Withdraw,
        "escrow" => BalanceOp::MoveToEscrow,
        "release" => BalanceOp::ReleaseEscrow,
        "deduct" => BalanceOp::DeductEscrow,
        _ => return None,
    };
    let asset = match asset {
        "money" => Asset::Money,
        "point" => Asset::Point,
        _ => return None,
    };
    Some((op, asset))
}

fn parse_composite(kind: &str) -> Option<CompositeOp> {
    match kind {
        "withdraw" => Some(CompositeOp::Withdraw),
        "escrow" => Some(CompositeOp::MoveToEscrow),
        "release" => Some(CompositeOp::ReleaseEscrow),
        _ => None,
    }
}

/// Reads and validates wallet commands from a CSV reader.
///
/// Supported headers: `type,member,money,point`.
/// `type` is trimmed and lowercased. Single-currency types (`deposit_money`,
/// `escrow_point`, ...) require the matching amount column; composite types
/// (`withdraw`, `escrow`, `release`) treat a blank column as zero.
///
/// # Examples
///
/// ```
/// use escrow_wallet::io::reader::read_commands;
/// use escrow_wallet::common::command::WalletCommand;
/// use csv::ReaderBuilder;
///
/// let data = "type,member,money,point\n\
/// open,1,,\n\
/// deposit_money,1,1000,\n\
/// escrow,1,300,50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(WalletCommand::Open { .. })));
/// assert!(matches!(commands[1], Ok(WalletCommand::Single { amount: 1000, .. })));
/// assert!(matches!(commands[2], Ok(WalletCommand::Composite { money: 300, point: 50, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<WalletCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.kind.trim().to_ascii_lowercase();
        let member = MemberId::new(row.member);

        if kind == "open" {
            return Ok(WalletCommand::Open { member });
        }

        if let Some((op, asset)) = parse_single(&kind) {
            let column = match asset {
                Asset::Money => row.money,
                Asset::Point => row.point,
            };
            let amount = column
                .ok_or_else(|| format!("{kind} missing {asset} amount for member {member}"))?;
            return Ok(WalletCommand::Single {
                member,
                asset,
                op,
                amount,
            });
        }

        if let Some(op) = parse_composite(&kind) {
            return Ok(WalletCommand::Composite {
                member,
                op,
                money: row.money.unwrap_or(0),
                point: row.point.unwrap_or(0),
            });
        }

        Err(format!("unknown command type: {kind} for member {member}"))
    })
}

/// Reads wallet snapshots written by [`crate::io::writer::write_snapshots`].
pub fn read_snapshots<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<WalletSnapshot, csv::Error>> + '_ {
    rdr.deserialize::<WalletSnapshot>()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: parse CSV input into collected commands for assertions.
    fn collect_commands(input: &str) -> Vec<Result<WalletCommand, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());
        read_commands(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_command_types() {
        let data = "type,member,money,point\n\
open,1,,\n\
deposit_money,1,100,\n\
deposit_point,1,,50\n\
withdraw_money,1,10,\n\
withdraw_point,1,,5\n\
escrow_money,1,20,\n\
release_point,1,,3\n\
deduct_money,1,4,\n\
withdraw,1,1,2\n\
escrow,1,,7\n\
release,1,9,\n";
        let commands = collect_commands(data);
        assert_eq!(commands.len(), 11);

        let m = MemberId::new(1);
        assert_eq!(commands[0], Ok(WalletCommand::Open { member: m }));
        assert_eq!(
            commands[2],
            Ok(WalletCommand::Single {
                member: m,
                asset: Asset::Point,
                op: BalanceOp::Deposit,
                amount: 50
            })
        );
        assert_eq!(
            commands[5],
            Ok(WalletCommand::Single {
                member: m,
                asset: Asset::Money,
                op: BalanceOp::MoveToEscrow,
                amount: 20
            })
        );
        assert_eq!(
            commands[7],
            Ok(WalletCommand::Single {
                member: m,
                asset: Asset::Money,
                op: BalanceOp::DeductEscrow,
                amount: 4
            })
        );
        assert_eq!(
            commands[9],
            Ok(WalletCommand::Composite {
                member: m,
                op: CompositeOp::MoveToEscrow,
                money: 0,
                point: 7
            })
        );
        assert!(commands.iter().all(Result::is_ok));
    }

    #[test]
    fn type_is_case_insensitive() {
        let commands = collect_commands("type,member,money,point\n OPEN ,4,,\nDeposit_Money,4,1,\n");
        assert_eq!(commands[0], Ok(WalletCommand::Open { member: MemberId::new(4) }));
        assert!(matches!(commands[1], Ok(WalletCommand::Single { amount: 1, .. })));
    }

    #[test]
    fn negative_amounts_are_passed_through_for_the_wallet_to_reject() {
        let commands = collect_commands("type,member,money,point\nwithdraw,1,-5,0\n");
        assert!(matches!(
            commands[0],
            Ok(WalletCommand::Composite { money: -5, point: 0, .. })
        ));
    }

    #[test]
    fn reports_missing_amount_error() {
        let commands = collect_commands("type,member,money,point\ndeposit_point,1,100,\n");
        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "deposit_point missing point amount for member 1");
    }

    #[test]
    fn reports_unknown_type_error() {
        let commands = collect_commands("type,member,money,point\nrefund_money,1,99,\n");
        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "unknown command type: refund_money for member 1");
    }

    #[test]
    fn reports_non_numeric_amount() {
        let commands = collect_commands("type,member,money,point\ndeposit_money,1,ten,\n");
        assert!(commands[0].is_err());
    }
}
