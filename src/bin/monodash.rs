//! CLI binary: serve the dashboard page or print it to the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use indicatif::{ProgressBar, ProgressStyle};
use monodash::config::{Config, FIRST_TOKEN_ENV, SECOND_TOKEN_ENV};
use monodash::dashboard::{Dashboard, Outcome, Section, load_dashboard};
use monodash::money::MoneyFormatter;
use owo_colors::OwoColorize;
use secrecy::ExposeSecret as _;

/// Monobank dashboard: merged balance, cashback and spending of two cards.
#[derive(Debug, Parser)]
#[command(name = "monodash", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the dashboard page over HTTP.
    Serve {
        /// Listen address, overriding `DASHBOARD_BIND`.
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Fetch both accounts once and print the dashboard.
    Show,
}

/// Installs the tracing subscriber, reads configuration and dispatches.
async fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} invalid configuration: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };
    warn_missing_tokens(&config)?;

    match cli.command {
        Command::Serve { bind } => cmd_serve(config, bind).await,
        Command::Show => cmd_show(&config).await,
    }
}

/// Hints at unset tokens; the bank will reject the empty ones.
fn warn_missing_tokens(config: &Config) -> io::Result<()> {
    let missing = [
        (FIRST_TOKEN_ENV, config.first_token.expose_secret().is_empty()),
        (SECOND_TOKEN_ENV, config.second_token.expose_secret().is_empty()),
    ];
    let mut err = io::stderr().lock();
    for (name, is_missing) in missing {
        if is_missing {
            writeln!(
                err,
                "{} {} is not set; create a .env file with {}=<your_token>",
                "hint:".cyan(),
                name.bold(),
                name
            )?;
        }
    }
    Ok(())
}

/// Executes the `serve` subcommand.
async fn cmd_serve(mut config: Config, bind: Option<String>) -> io::Result<ExitCode> {
    if let Some(addr) = bind {
        config.bind = addr;
    }
    match monodash::server::serve(config).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} server failed: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `show` subcommand.
async fn cmd_show(config: &Config) -> io::Result<ExitCode> {
    let (first, second) = match config.bank_clients() {
        Ok(clients) => clients,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to build client: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let spinner = make_spinner("Fetching bank history...");
    let outcome = load_dashboard(&first, &second, chrono::Utc::now()).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(Outcome::Ready(dashboard)) => {
            write_dashboard(&mut io::stdout().lock(), &dashboard, &config.money())?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::WhiteCardNotFound) => {
            writeln!(
                io::stderr().lock(),
                "{} White card not found.",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            tracing::error!(error = %err, "can't fetch bank history");
            writeln!(
                io::stderr().lock(),
                "{} Can't fetch bank history.",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Writes the dashboard as headings and two transaction tables.
fn write_dashboard<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    money: &MoneyFormatter,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "Current balance:".green().bold(),
        money.format(dashboard.balance)
    )?;
    writeln!(
        out,
        "{} {}",
        "Total cashback:".green().bold(),
        money.format(dashboard.cashback_total)
    )?;
    write_section(out, "Debit", &dashboard.debit, money)?;
    write_section(out, "Credit", &dashboard.credit, money)
}

/// Writes one section heading and its table.
fn write_section<W: Write>(
    out: &mut W,
    label: &str,
    section: &Section,
    money: &MoneyFormatter,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {} {}",
        format_args!("{label}.").green().bold(),
        format_args!("Total: {}", money.format(section.total)),
        format_args!("({})", section.entries.len()).dimmed()
    )?;
    if section.entries.is_empty() {
        writeln!(out, "{}", "No transactions.".dimmed())?;
        return Ok(());
    }
    writeln!(out, "{}", section_table(section, money))
}

/// Builds the table of a section's entries.
fn section_table(section: &Section, money: &MoneyFormatter) -> Table {
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Provider").fg(Color::Cyan),
        Cell::new("Amount").fg(Color::Cyan),
        Cell::new("Balance").fg(Color::Cyan),
    ]);

    for tx in &section.entries {
        let date = tx.occurred_at().map_or_else(
            || "unknown".to_owned(),
            |at| at.format("%Y-%m-%d %H:%M").to_string(),
        );
        let amount_color = if tx.is_debit() {
            Color::Green
        } else {
            Color::Red
        };
        _ = table.add_row(vec![
            Cell::new(date),
            Cell::new(&tx.description),
            Cell::new(money.format(tx.amount)).fg(amount_color),
            Cell::new(money.format(tx.balance)),
        ]);
    }
    table
}

/// Creates a spinner with the given message.
fn make_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(core::time::Duration::from_millis(80));
    spinner
}

#[actix_web::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            // Last-resort error output.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
