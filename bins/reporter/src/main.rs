//! Report writer for Coliving.
//!
//! Usage:
//!   reporter <unit-id> [YYYY-MM]          - Write a unit's CSV reports
//!   reporter spends <user-id> [YYYY-MM]   - Log a user's spends across units
//!
//! The month defaults to the current one. Unit reports (the monthly report,
//! the expense list and the contribution list) go to `report.output_dir`.
//!
//! Exits with 2 when the input was at fault (bad arguments, unknown unit) and
//! 1 for anything else.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use coliving_core::balance::BalanceService;
use coliving_core::period::MonthKey;
use coliving_core::reports::ReportService;
use coliving_core::reports::export::{
    contributions_csv, contributions_file_name, expenses_csv, expenses_file_name,
    report_file_name, unit_report_csv,
};
use coliving_core::spends::SpendsService;
use coliving_db::{Store, StoreError};
use coliving_shared::types::{UnitId, UserId, format_money};
use coliving_shared::{AppConfig, AppError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: reporter <unit-id> [YYYY-MM] | reporter spends <user-id> [YYYY-MM]";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Write the CSV reports for one unit.
    Unit {
        unit_id: UnitId,
        month: Option<MonthKey>,
    },
    /// Log one user's spends.
    Spends {
        user_id: UserId,
        month: Option<MonthKey>,
    },
}

fn invalid(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}

fn parse_month(arg: Option<String>) -> Result<Option<MonthKey>, AppError> {
    arg.map(|m| MonthKey::parse(&m).ok_or_else(|| invalid(format!("invalid month: {m}"))))
        .transpose()
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, AppError> {
        let first = args.next().ok_or_else(|| invalid(USAGE))?;
        let command = if first == "spends" {
            let user = args.next().ok_or_else(|| invalid(USAGE))?;
            let user_id = user
                .parse::<UserId>()
                .map_err(|_| invalid(format!("invalid user id: {user}")))?;
            Self::Spends {
                user_id,
                month: parse_month(args.next())?,
            }
        } else {
            let unit_id = first
                .parse::<UnitId>()
                .map_err(|_| invalid(format!("invalid unit id: {first}")))?;
            Self::Unit {
                unit_id,
                month: parse_month(args.next())?,
            }
        };
        if let Some(extra) = args.next() {
            return Err(invalid(format!("unexpected argument: {extra}")));
        }
        Ok(command)
    }
}

/// Process exit status for a failed run.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AppError>() {
        Some(app) if app.is_user_facing() => 2,
        _ => 1,
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<AppError>()
        .map_or("INTERNAL_ERROR", AppError::error_code)
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> anyhow::Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "report written");
    Ok(())
}

async fn write_unit_reports(
    store: &Store,
    config: &AppConfig,
    unit_id: UnitId,
    month: MonthKey,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let policy = config.allocation.end_date_policy;
    let (snapshot, contributions) = tokio::try_join!(
        store.snapshots.unit_snapshot(unit_id),
        store.contributions.list(unit_id),
    )
    .map_err(AppError::from)?;

    let sheet = BalanceService::month_balances(&snapshot, month, policy);
    let currency = snapshot.unit.currency();
    info!(
        unit = %snapshot.unit.name,
        %month,
        total = %format_money(sheet.total.amount, currency),
        source = ?sheet.total.source,
        wallet = %format_money(sheet.wallet.wallet_balance, currency),
        "month balances"
    );

    let dir = Path::new(&config.report.output_dir);
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let name = &snapshot.unit.name;
    let report = ReportService::unit_month_report(&snapshot, month, policy);
    let report_csv = unit_report_csv(&report).map_err(AppError::from)?;
    let expenses = expenses_csv(&snapshot.expenses, currency).map_err(AppError::from)?;
    let contributions = contributions_csv(&contributions, currency).map_err(AppError::from)?;

    write(dir, &report_file_name(name, month), &report_csv)?;
    write(dir, &expenses_file_name(name, today), &expenses)?;
    write(dir, &contributions_file_name(name, today), &contributions)?;
    Ok(())
}

async fn log_spends(
    store: &Store,
    config: &AppConfig,
    user_id: UserId,
    month: MonthKey,
) -> anyhow::Result<()> {
    let snapshots = store
        .snapshots
        .user_snapshots(user_id)
        .await
        .map_err(AppError::from)?;
    let summary = SpendsService::summarize(
        &snapshots,
        user_id,
        month,
        config.allocation.end_date_policy,
        config.report.default_currency,
    );

    for unit in &summary.units {
        info!(
            unit = %unit.unit_name,
            %month,
            paid = %format_money(unit.this_month.paid, unit.currency),
            expected = %format_money(unit.this_month.expected, unit.currency),
            balance = %format_money(unit.this_month.balance, unit.currency),
            "unit spends"
        );
    }
    info!(
        %user_id,
        %month,
        units = summary.units.len(),
        this_month = %format_money(summary.this_month.balance, summary.currency),
        all_time = %format_money(summary.all_time.balance, summary.currency),
        mixed_currencies = summary.mixed_currencies,
        "spends summary"
    );
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let command = Command::parse(std::env::args().skip(1))?;
    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("loading configuration")?;

    let db = coliving_db::connect(&config.database)
        .await
        .map_err(|e| AppError::from(StoreError::from(e)))?;
    info!("Connected to database");
    let store = Store::new(db);

    let today = Utc::now().date_naive();
    match command {
        Command::Unit { unit_id, month } => {
            let month = month.unwrap_or_else(|| MonthKey::of(today));
            write_unit_reports(&store, &config, unit_id, month, today).await
        }
        Command::Spends { user_id, month } => {
            let month = month.unwrap_or_else(|| MonthKey::of(today));
            log_spends(&store, &config, user_id, month).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coliving=info,reporter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = error_code(&err), "{err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}
