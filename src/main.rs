use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use baseline_search::Language;
use baseline_search::core::catalog::Catalog;
use baseline_search::core::config::{self, CliOverrides, EnvOverrides, SearchConfig};
use baseline_search::core::i18n::Text;
use baseline_search::core::state::App;
use baseline_search::tui;
use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "baseline-search",
    about = "Search and browse web-features Baseline data"
)]
struct Args {
    /// Display language
    #[arg(long, value_enum, conflicts_with_all = ["en", "ja"])]
    lang: Option<Language>,

    /// Shorthand for --lang en
    #[arg(long, conflicts_with = "ja")]
    en: bool,

    /// Shorthand for --lang ja
    #[arg(long)]
    ja: bool,

    /// web-features data.json to load instead of the bundled snapshot
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    fn language(&self) -> Option<Language> {
        if self.en {
            Some(Language::En)
        } else if self.ja {
            Some(Language::Ja)
        } else {
            self.lang
        }
    }
}

fn init_logging(level: LevelFilter) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // Prefer ~/.baseline-search, fall back to the working directory
    let in_config_dir = config::config_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        File::create(dir.join("baseline-search.log")).ok()
    });
    let log_file = in_config_dir.or_else(|| File::create("baseline-search.log").ok());

    if let Some(log_file) = log_file {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_level.into());

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        SearchConfig::default()
    });
    let cli = CliOverrides {
        language: args.language(),
        data_path: args.data.clone(),
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &cli);
    log::info!(
        "Baseline Search starting up (language: {}, data: {})",
        resolved.language.code(),
        resolved
            .data_path
            .as_deref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string())
    );

    let loaded = match &resolved.data_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::bundled(),
    };
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load feature data: {}", e);
            eprintln!("{}", resolved.language.tr(Text::ErrorLoadingData, &[&e]));
            return Ok(ExitCode::FAILURE);
        }
    };

    let today = chrono::Local::now().date_naive();
    let language = resolved.language;
    let app = App::new(catalog, &resolved, today);

    tui::run(app)?;

    println!("{}", language.text(Text::Exit));
    log::info!("Baseline Search exited");
    Ok(ExitCode::SUCCESS)
}
