use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use dompet_rs::{
    ledger::{edit_balance, record_daily_expense, record_expense, record_income},
    stores::sqlite::create_app_state,
};

/// A utility for creating a seeded database for manual testing of dompet_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    let mut state = create_app_state(connection)?;

    println!("Seeding test data...");

    state.settings.set_payday_date(25)?;

    edit_balance(&mut state, 1_000_000.0, "Opening balance").await?;
    record_income(&mut state, "Salary", 5_000_000.0).await?;
    record_expense(&mut state, "Groceries", 350_000.0, "Food").await?;
    record_expense(&mut state, "Electricity bill", 420_000.0, "Utilities").await?;
    record_daily_expense(&mut state, "Morning coffee", 25_000.0, "Food").await?;
    record_daily_expense(&mut state, "Commute", 15_000.0, "Transport").await?;

    println!("Success!");

    Ok(())
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(filter::LevelFilter::INFO))
        .init();
}
