//! Library loan system
//!
//! Opens the store, loads every screen and prints the catalogue as JSON.

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use library_loans::{
    models::{Author, Book, Loan, Member},
    App, AppConfig, Database,
};

#[derive(Serialize)]
struct Snapshot {
    authors: Vec<Author>,
    books: Vec<Book>,
    members: Vec<Member>,
    loans: Vec<Loan>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_loans={}", config.logging.level).into());

    // Logs go to stderr, stdout carries the snapshot
    let fmt_layer = if config.json_logs() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Starting library-loans v{}", env!("CARGO_PKG_VERSION"));

    let database = Database::connect(&config.database).await?;
    let app = App::new(&database);
    app.refresh_all().await;

    let snapshot = Snapshot {
        authors: app.authors.state().items,
        books: app.books.state().items,
        members: app.members.state().items,
        loans: app.loans.state().items,
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    database.close().await;
    Ok(())
}
