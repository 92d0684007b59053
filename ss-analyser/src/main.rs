use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use log::{error, info, LevelFilter};
use ss_analyser::{parse_freq_mhz, AnalyserConfig, AnalysisSession, DecodeSummary, OutputFormat};
use ss_core::DEFAULT_MAX_CAPTURE_SIZE;

#[derive(Parser, Debug)]
#[command(
    name = "ss-analyser",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute a frequency quality index from an ath9k/ath10k/ath11k spectral scan capture",
    long_about = None,
)]
struct Cli {
    /// Файл спектрального сканирования (TLV)
    bin_file: PathBuf,
    /// Частота канала (2412, 2412MHz, 2.412GHz). 0 = все частоты
    #[arg(default_value = "0")]
    freq: String,
    /// Учитывать только выборки с этим значением RSSI
    #[arg(long)]
    rssi: Option<u8>,
    /// Формат вывода: legacy, json
    #[arg(long, default_value = "legacy")]
    format: String,
    /// Максимальный размер файла захвата (байт)
    #[arg(long, default_value_t = DEFAULT_MAX_CAPTURE_SIZE)]
    max_size: u64,
    /// Вывести статистику декодирования
    #[arg(long)]
    stats: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
    /// Подробный вывод (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::Error;
    }

    match cli.verbose {
        0 if cli.stats => LevelFilter::Info,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn usage() {
    eprintln!("{}", Cli::command().render_usage());
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(&cli))
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let freq_mhz = match parse_freq_mhz(&cli.freq) {
        Ok(0) => None,
        Ok(f) => Some(f),
        Err(e) => {
            error!("freq: {e}");
            usage();
            std::process::exit(1);
        }
    };

    let output_format: OutputFormat = match cli.format.parse() {
        Ok(f) => f,
        Err(e) => {
            error!("--format: {e}");
            std::process::exit(1);
        }
    };

    let config = AnalyserConfig {
        input_path: cli.bin_file.clone(),
        freq_mhz,
        rssi: cli.rssi,
        output_format,
        max_capture_bytes: cli.max_size,
    };

    let session = match AnalysisSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let output = match session.load() {
        Ok(o) => o,
        Err(e) => {
            error!("{e}");
            usage();
            std::process::exit(1);
        }
    };

    if cli.stats {
        let summary = DecodeSummary::new(&output);
        info!("Decode stats: {summary}");
    }

    let report = match session.analyse(&output) {
        Ok(r) => r,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    match report.render(output_format) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
