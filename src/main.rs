use clap::Parser;
use hellodash::core::config::{self, CliOverrides};
use hellodash::core::report::write_diagnostics;
use hellodash::host::DiskFileStore;
use hellodash::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hellodash", about = "Greeting, dashboard and test report demo")]
struct Args {
    /// Screen to start on: greeting, dashboard or report
    #[arg(short, long)]
    start_screen: Option<String>,

    /// Directory the report is saved to
    #[arg(short, long)]
    report_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.hellodash/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value = "debug", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("invalid log level '{s}' (off, error, warn, info, debug, trace)"))
}

/// Log to `<data_dir>/hellodash.log`, or `./hellodash.log` if the data dir is unusable.
/// The terminal belongs to the UI, so nothing is logged to stdout.
fn init_logging(data_dir: &Path, level: LevelFilter) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_file = fs::create_dir_all(data_dir)
        .and_then(|()| File::create(data_dir.join("hellodash.log")))
        .or_else(|_| File::create("hellodash.log"));

    if let Ok(log_file) = log_file {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The log file lives in the configured data dir, so config comes first
    // and reports what it found once the logger is up.
    let loaded = config::load_config(args.config.as_deref());
    let cli = CliOverrides {
        start_screen: args.start_screen,
        report_dir: args.report_dir,
    };
    let file_config = loaded.as_ref().map(|(config, _)| config);
    let resolved = config::resolve(file_config.unwrap_or(&Default::default()), &cli);

    init_logging(&resolved.data_dir, args.log_level);
    log::info!("hellodash starting up");
    match &loaded {
        Ok((_, source)) => source.log(),
        Err(e) => log::warn!("Ignoring config file: {}", e),
    }
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Resolved config: {:?}", resolved);

    let mut private_store = DiskFileStore::new(&resolved.data_dir);
    write_diagnostics(&mut private_store);

    tui::run(resolved)
}
