use clap::Parser;
use finwell::core::catalog::StationId;
use finwell::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "finwell", about = "Financial wellbeing showroom for the terminal")]
struct Args {
    /// Open this station directly instead of the menu
    #[arg(short, long, value_enum)]
    station: Option<StationId>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to finwell.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("finwell.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            log::warn!("Falling back to default config: {e}");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.station);

    log::info!("Finwell starting up (start station: {:?})", resolved.start_station);

    finwell::tui::run(resolved)
}
