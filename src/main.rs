use std::env;
use std::io;
use std::path::PathBuf;

use color_name::{Bridge, init_logger, parse_level, serve};
use log::LevelFilter;

const DICTIONARY_VAR: &str = "COLOR_NAME_DICTIONARY";
const CONFIG_VAR: &str = "COLOR_NAME_CONFIG";
const LOG_VAR: &str = "COLOR_NAME_LOG";
const LOG_LEVEL_VAR: &str = "COLOR_NAME_LOG_LEVEL";

fn main() {
    if let Err(err) = run() {
        eprintln!("color-name: {err}");
        std::process::exit(1);
    }
}

fn run() -> color_name::Result<()> {
    if let Some(path) = env::var_os(LOG_VAR) {
        let level = match env::var(LOG_LEVEL_VAR) {
            Ok(level) => parse_level(&level)?,
            Err(_) => LevelFilter::Debug,
        };
        init_logger(path, level)?;
    }

    let dictionary = env::var_os(DICTIONARY_VAR).map(PathBuf::from);
    let config = env::var_os(CONFIG_VAR).map(PathBuf::from);
    let mut bridge = Bridge::load(dictionary.as_deref(), config.as_deref())?;

    log::info!(
        "serving with {} dictionary colors",
        bridge.dictionary().len()
    );
    serve(&mut bridge, io::stdin().lock(), io::stdout().lock())
}
