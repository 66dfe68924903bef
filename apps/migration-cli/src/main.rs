use clap::{Parser, ValueEnum};
use migration::MigrationCommand;
use sea_orm::Database;

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Gavel database migration tool")]
struct Args {
    /// Migration command to run
    command: String,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type
    #[arg(
        short,
        long,
        value_enum,
        default_value = "postgres",
        help = "Database type: postgres, sqlite-file"
    )]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Check if this is a database type error and provide helpful message
            if e.to_string().contains("invalid value") && e.to_string().contains("--db") {
                eprintln!("❌ Unsupported database type provided.");
                eprintln!();
                eprintln!("Note: SQLite in-memory databases are not supported for CLI operations.");
                eprintln!(
                    "Reason: In-memory databases are ephemeral - each CLI command creates a fresh"
                );
                eprintln!(
                    "database that is destroyed when the command completes, making migration"
                );
                eprintln!("operations pointless.");
                eprintln!();
                eprintln!("Supported database types:");
                eprintln!("  • postgres    - PostgreSQL database");
                eprintln!("  • sqlite-file - SQLite file database");
                eprintln!();
                eprintln!("Example: cargo run --manifest-path apps/migration-cli/Cargo.toml -- --db sqlite-file status");
                std::process::exit(1);
            }
            // For other errors, use clap's default error handling
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let command = match args.command.as_str() {
        "up" => MigrationCommand::Up,
        "down" => MigrationCommand::Down,
        "fresh" => MigrationCommand::Fresh,
        "reset" => MigrationCommand::Reset,
        "refresh" => MigrationCommand::Refresh,
        "status" => MigrationCommand::Status,
        other => {
            eprintln!("Unknown command: {other}. Use: up | down | fresh | reset | refresh | status");
            std::process::exit(2);
        }
    };

    let url = match build_url(&args.env, &args.db) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}

/// Assemble the connection URL from the environment.
///
/// Migrations run as the owner role, which holds DDL rights; the backend
/// itself connects with the unprivileged app role.
fn build_url(env: &Env, db: &Db) -> Result<String, String> {
    match db {
        Db::Postgres => {
            let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let name = match env {
                Env::Prod => must_var("PROD_DB")?,
                Env::Test => {
                    let name = must_var("TEST_DB")?;
                    // guard against pointing tests at a non-test database
                    if !name.ends_with("_test") {
                        return Err(format!("TEST_DB must end with '_test', got '{name}'"));
                    }
                    name
                }
            };
            let user = must_var("GAVEL_OWNER_USER")?;
            let password = must_var("GAVEL_OWNER_PASSWORD")?;
            Ok(format!("postgresql://{user}:{password}@{host}:{port}/{name}"))
        }
        Db::SqliteFile => {
            let default_path = match env {
                Env::Prod => "gavel.sqlite",
                Env::Test => "gavel_test.sqlite",
            };
            let path =
                std::env::var("GAVEL_SQLITE_PATH").unwrap_or_else(|_| default_path.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
    }
}

fn must_var(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing environment variable: {key}"))
}
