use clap::Parser;
use guarded_record::demo::Demo;

#[derive(Parser)]
#[command(name = "guarded-record")]
#[command(about = "Symbols, guarded views and reflective accessors on a player record")]
#[command(version)]
pub struct Cli {
    /// Which walkthrough to run
    #[arg(long, value_enum, default_value_t = Demo::All)]
    pub demo: Demo,

    /// Print the final record as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log: String,
}
