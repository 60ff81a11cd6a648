use std::{
    fs::File,
    io::{BufWriter, stdout},
    path::PathBuf,
};

use tracing::{info, warn};

use crate::{
    common::error::AppError,
    domain::{
        ledger::{InMemoryWalletStore, WalletStore},
        wallet::Wallet,
    },
    io::{reader, writer},
    worker::processor::Processor,
};

/// Run options taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Command CSV to replay.
    pub input: PathBuf,
    /// Wallet state to start from instead of an empty store.
    pub snapshot: Option<PathBuf>,
    /// Where to write the final wallet state.
    pub save: Option<PathBuf>,
    /// Abort on the first rejected command instead of skipping it.
    pub strict: bool,
}

impl Config {
    /// Parses `<program> <commands.csv> [--snapshot <path>] [--save <path>] [--strict]`.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into).skip(1);
        let mut input = None;
        let mut snapshot = None;
        let mut save = None;
        let mut strict = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--snapshot" => snapshot = Some(flag_value(&mut args, "--snapshot")?),
                "--save" => save = Some(flag_value(&mut args, "--save")?),
                "--strict" => strict = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown flag {flag}")));
                }
                _ if input.is_none() => input = Some(PathBuf::from(&arg)),
                _ => return Err(AppError::Usage(format!("unexpected argument {arg}"))),
            }
        }

        Ok(Self {
            input: input.ok_or(AppError::MissingArg)?,
            snapshot,
            save,
            strict,
        })
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<PathBuf, AppError> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a path")))
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = Config::from_args(args)?;
    let mut store = InMemoryWalletStore::new();

    if let Some(path) = &config.snapshot {
        load_snapshot(&mut store, File::open(path)?)?;
        info!(path = %path.display(), wallets = store.len(), "snapshot loaded");
    }

    let file = File::open(&config.input)?;
    replay(&mut store, file, config.strict)?;

    // After processing all commands, write the balance report to stdout
    let wallets = store.wallets();
    let stdout = stdout();
    writer::write_balances(BufWriter::new(stdout.lock()), &wallets)?;

    if let Some(path) = &config.save {
        writer::write_snapshots(BufWriter::new(File::create(path)?), &wallets)?;
        info!(path = %path.display(), wallets = wallets.len(), "snapshot saved");
    }

    Ok(())
}

/// Applies every command in `input` to `store`.
///
/// Rejected commands are logged and skipped unless `strict` is set; malformed rows
/// always abort.
pub fn replay<S, R>(store: &mut S, input: R, strict: bool) -> Result<Processor, AppError>
where
    S: WalletStore + ?Sized,
    R: std::io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let mut processor = Processor::new();

    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        match processor.process(store, command) {
            Ok(()) => {}
            Err(e) if e.is_rejection() && !strict => {}
            Err(e) => return Err(e),
        }
    }

    if processor.rejected() > 0 {
        warn!(rejected = processor.rejected(), "some commands were rejected");
    }
    info!(
        applied = processor.applied(),
        rejected = processor.rejected(),
        "commands replayed"
    );
    Ok(processor)
}

/// Fills `store` from a snapshot CSV, validating every wallet.
pub fn load_snapshot<S, R>(store: &mut S, input: R) -> Result<(), AppError>
where
    S: WalletStore + ?Sized,
    R: std::io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    for snapshot in reader::read_snapshots(&mut reader) {
        store.insert(Wallet::try_from(snapshot?)?)?;
    }
    Ok(())
}
