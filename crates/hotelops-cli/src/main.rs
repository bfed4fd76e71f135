//! HotelOps CLI
//!
//! Interactive console for hotel operations

use clap::Parser;
use hotelops_core::logging_facility::{self, Profile};
use hotelops_engine::{run, Console, Session, StdConsole};
use hotelops_store::{Client, ConnectionConfig};

#[derive(Debug, Parser)]
#[command(name = "hotelops")]
#[command(about = "HotelOps - hotel operations console", long_about = None)]
struct Cli {
    /// Database name; resolves to `<name>.db` unless it already has an extension
    database: String,
    port: u16,
    user: String,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(Profile::Interactive);

    let config = ConnectionConfig::new(cli.database, cli.port, cli.user);
    tracing::info!(target_db = %config.describe(), "starting");

    let client = match Client::connect(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e.message());
            std::process::exit(1);
        }
    };

    let mut session = Session::new(client, StdConsole::new());
    run(&mut session);

    let (client, mut console) = session.into_parts();
    console.print("Disconnecting from database...");
    client.close();
    console.println("Done\n\nBye !");
}
