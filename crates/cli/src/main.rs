//! # CLI - Air-quality record shell
//!
//! A REPL over the air-quality store. Reads commands from stdin, runs them
//! against the table file, and prints results to stdout. Works interactively
//! or scripted (pipe commands via stdin). Logs go to stderr.
//!
//! ## Commands
//!
//! ```text
//! AUTH user pass                       Log in (or AUTH "Basic <base64>")
//! GET country city                     Readings for one city
//! CREATE country city <10 fields>      Append a new city
//! UPDATE country city <10 fields>      Replace a city's readings
//! DELETE country city                  Soft-delete (readings become N/A)
//! COUNTRIES | CITIES | RECORDS         Listings
//! CO-HEALTHY | CO-UNHEALTHY            CO category queries
//! CATEGORY pollutant cat[|cat...]      Cities in any of the categories
//! RANGE pollutant start end            Cities with start <= value <= end
//! STATS                                Country/city/deleted counts
//! EXIT / QUIT                          Leave the shell
//! ```
//!
//! The ten fields are value then category for AQI, CO, ozone, NO2 and PM2.5.
//! Quote arguments that contain spaces: `"Very Unhealthy"`. Results print as
//! JSON; failures print as `ERR <status> <message>`.
//!
//! ## Configuration
//!
//! ```text
//! AIRQ_DB_PATH   table file path   (default: "data/global-air-pollution-dataset.csv")
//! AIRQ_USERNAME  login name        (default: "username")
//! AIRQ_PASSWORD  login password    (default: "password")
//! AIRQ_LOG       tracing filter    (default: "warn")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ AIRQ_DB_PATH=air.csv cargo run -p cli
//! airq started (db=air.csv)
//! > AUTH username password
//! OK
//! > GET USA "Los Angeles"
//! {"aqiValue":"50","aqiCategory":"Good",...}
//! > EXIT
//! bye
//! ```

mod shell;

use anyhow::Result;
use config::Config;
use shell::{Reply, Shell};
use std::io::{self, BufRead, Write};
use store::{AirQualityService, Credentials};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    let cfg = Config::from_env();
    setup_tracing(&cfg.log_filter);
    info!(?cfg, "starting shell");

    let service = AirQualityService::new(&cfg.db_path);
    let mut shell = Shell::new(service, Credentials::new(&cfg.username, &cfg.password));

    println!("airq started (db={})", cfg.db_path.display());
    println!("Commands: AUTH | GET | CREATE | UPDATE | DELETE | COUNTRIES | CITIES | RECORDS");
    println!("          CO-HEALTHY | CO-UNHEALTHY | CATEGORY | RANGE | STATS | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        match shell.execute(&line) {
            Reply::Exit => {
                println!("bye");
                break;
            }
            Reply::Print(out) if out.is_empty() => {}
            Reply::Print(out) => println!("{out}"),
        }

        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}
