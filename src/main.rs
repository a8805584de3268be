use clap::Parser;
use std::io::IsTerminal;
use guarded_record::{Record, demo, logging};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let subscriber = logging::console_subscriber(
        logging::env_filter(&cli.log),
        std::io::stdout().is_terminal(),
        std::io::stdout,
    );
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let player = Record::player().into_shared();

    if let Err(e) = demo::run(cli.demo, &player) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if cli.json {
        match serde_json::to_string_pretty(&*player.borrow()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }
}
