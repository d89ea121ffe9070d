use std::path::PathBuf;

use clap::Parser;
use staffdesk::cli::{menu, output};
use staffdesk::config::Config;
use staffdesk::db;
use tracing::{error, info};

/// Interactive employee, role, and department tracker.
#[derive(Parser)]
#[command(name = "staffdesk", version, about)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("staffdesk starting");

    let spinner = output::spinner("Connecting to database...");
    let pool = match db::create_pool(&config.database.url(), config.database.pool_size) {
        Ok(pool) => pool,
        Err(e) => {
            output::spinner_fail(&spinner, "Database connection failed");
            error!(error = %e, "could not create connection pool");
            std::process::exit(1);
        }
    };
    if let Err(e) = db::run_migrations(&pool) {
        output::spinner_fail(&spinner, "Schema setup failed");
        error!(error = %e, "could not run migrations");
        std::process::exit(1);
    }
    output::spinner_success(&spinner, "Connected");

    if let Err(e) = menu::run(&pool) {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("staffdesk stopped");
}
