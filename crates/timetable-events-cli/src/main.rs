use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::stdout;
use std::path::PathBuf;
use std::{env, process};
use timetable_events_config::Config;
use timetable_events_engine::{EventParser, LogObserver, RawEventAssembler, io};

/// What the command line asked for, before falling back to the config file.
#[derive(Debug, Default, PartialEq)]
struct Args {
    input_path: Option<PathBuf>,
    reference_date: Option<NaiveDate>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    match args {
        [] => Ok(Args::default()),
        [input] => Ok(Args {
            input_path: Some(PathBuf::from(input)),
            reference_date: None,
        }),
        [input, date] => Ok(Args {
            input_path: Some(PathBuf::from(input)),
            reference_date: Some(
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .with_context(|| format!("Invalid reference date '{date}', expected YYYY-MM-DD"))?,
            ),
        }),
        _ => anyhow::bail!("Too many arguments"),
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [tokens.json] [reference-date]");
    eprintln!(
        "Missing values are read from the config file at {}",
        Config::config_path().display()
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map_or("timetable-events-cli", String::as_str);

    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e:#}");
            usage(program);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let Some(input_path) = args.input_path.or(config.input_path.clone()) else {
        eprintln!("Error: No tokens file provided and none configured");
        usage(program);
        process::exit(1);
    };
    let Some(reference_date) = args.reference_date.or(config.reference_date) else {
        eprintln!("Error: No reference date provided and none configured");
        usage(program);
        process::exit(1);
    };

    log::info!(
        "Reading tokens from {} (reference date {reference_date})",
        input_path.display()
    );
    let tokens = io::read_tokens(&input_path)
        .with_context(|| format!("Failed to read tokens from '{}'", input_path.display()))?;

    let mut assembler = RawEventAssembler::new(reference_date);
    for token in &tokens {
        assembler.push(token);
    }
    if let Some(dangling) = assembler.pending() {
        log::warn!("Dropping text after the last terminator: {dangling:?}");
    }
    let blocks = assembler.finish();
    log::info!("Assembled {} raw events from {} tokens", blocks.len(), tokens.len());

    let phrases = config
        .type_phrase_table()
        .context("Invalid [type_phrases] in config file")?;
    let parser = EventParser::new(phrases);
    let events = parser.parse_all(blocks, &mut LogObserver)?;
    log::info!("Parsed {} events", events.len());

    io::write_events(stdout().lock(), &events, config.pretty)?;
    Ok(())
}
