extern crate golf_bayes;

use std::env;
use std::error::Error;

use log::info;

use golf_bayes::config::Config;
use golf_bayes::dataset::{TrainingSet, GOLF};
use golf_bayes::input::{infer, load};
use golf_bayes::naive_bayes::{NaiveBayes, Query};
use golf_bayes::stats::Stats;

const USAGE: &str = "usage: predict-golf [--data FILE.csv] [--config FILE.json] \
                     (--stats | WEATHER TEMPERATURE HUMIDITY WIND)";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut cfg = Config::new();
    let mut data_file: Option<String> = None;
    let mut show_stats = false;
    let mut values: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => data_file = Some(args.next().ok_or(USAGE)?),
            "--config" => cfg = Config::load(&args.next().ok_or(USAGE)?)?,
            "--stats" => show_stats = true,
            "--debug" => cfg.set_debug(true),
            _ => values.push(arg.trim().to_ascii_uppercase()),
        }
    }

    let loaded: TrainingSet;
    let data: &TrainingSet = match data_file {
        Some(ref path) => {
            let fmt = infer(path)?;
            info!("loading training data from {}\n{}", path, fmt.to_string());
            loaded = load(path, fmt)?;
            &loaded
        }
        None => &*GOLF,
    };
    info!("classifier config:\n{}", cfg.to_string());

    if show_stats {
        let stats = Stats::of(data);
        println!("{}", stats.to_json()?);
        return Ok(());
    }

    if values.len() != 4 {
        return Err(USAGE.into());
    }
    let query = Query::new(&values[0], &values[1], &values[2], &values[3]);
    let nb = NaiveBayes::new(&cfg, data);
    let prediction = nb.predict(&query)?;
    info!("{:?}\n{}", query, prediction.to_string());
    println!("{}", prediction.to_json()?);
    Ok(())
}
