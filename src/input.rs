//! This module implements the training data loader.
//!
//! Training sets are read from delimited text with five columns: the four
//! features in the order weather, temperature, humidity, wind, and the label
//! at `label_idx` (the last column by default). Values are trimmed and
//! upper-cased before use.
//!
//! # Example
//! ```rust
//! use golf_bayes::input::{load_csv, InputFormat};
//! let text = "weather,temperature,humidity,wind,play\n\
//!             rainy,hot,high,no,yes\n\
//!             sunny,mild,high,no,no\n";
//! let mut fmt = InputFormat::csv_format();
//! fmt.set_header(true);
//! let set = load_csv(text.as_bytes(), fmt).unwrap();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.records()[0].weather, "RAINY");
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use log::debug;
use regex::Regex;

use crate::dataset::{Feature, Label, TrainingRecord, TrainingSet};
use crate::errors::{BayesError, Result};

const COLUMNS: usize = 5;

/// The input file format struct.
#[derive(Copy, Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct InputFormat {
    /// Whether the first line holds column names.
    pub header: bool,

    /// Which column holds the label. (default = 4)
    pub label_idx: usize,

    /// Delimeter of the data file.
    pub delimeter: char,
}

impl Default for InputFormat {
    fn default() -> Self {
        InputFormat::csv_format()
    }
}

impl InputFormat {
    /// Return a default CSV input format.
    pub fn csv_format() -> InputFormat {
        InputFormat {
            header: false,
            label_idx: COLUMNS - 1,
            delimeter: ',',
        }
    }

    /// Transform the input format to human readable string.
    pub fn to_string(&self) -> String {
        let mut s = String::from("");
        s.push_str(&format!("Has header: {}\n", self.header));
        s.push_str(&format!("Label index: {}\n", self.label_idx));
        s.push_str(&format!("Delemeter: [{}]", self.delimeter));
        s
    }

    pub fn set_header(&mut self, header: bool) {
        self.header = header;
    }

    pub fn set_label_index(&mut self, idx: usize) {
        self.label_idx = idx;
    }

    pub fn set_delimeter(&mut self, delim: char) {
        self.delimeter = delim;
    }
}

fn count(mut map: BTreeMap<char, u32>, c: char) -> BTreeMap<char, u32> {
    *map.entry(c).or_insert(0) += 1;
    map
}

/// Guess the delimeter and header of a data line pair.
///
/// The delimeter is the most frequent character left after removing the
/// category tokens, preferring `,` when it separates every column. The first
/// line is a header if it names any of the features.
///
/// # Example
/// ```rust
/// use golf_bayes::input::infer_lines;
/// let fmt = infer_lines("Weather;Temperature;Humidity;Wind;Play", "RAINY;HOT;HIGH;NO;YES");
/// assert_eq!(fmt.delimeter, ';');
/// assert!(fmt.header);
/// ```
pub fn infer_lines(first_line: &str, second_line: &str) -> InputFormat {
    let mut input_format = InputFormat::csv_format();

    let tokens = Regex::new(r"[A-Za-z0-9_]+").expect("token pattern is valid");
    let sample = if second_line.trim().is_empty() {
        first_line
    } else {
        second_line
    };
    let remains = tokens.replace_all(sample.trim_end_matches(&['\r', '\n'][..]), "");
    let cnt = remains.chars().filter(|c| *c != ' ').fold(BTreeMap::new(), count);

    let default_delim = ',';
    match cnt.get(&default_delim) {
        Some(n) if *n as usize >= COLUMNS - 1 => input_format.delimeter = default_delim,
        _ => {
            let mut max_cnt: u32 = 0;
            for (k, v) in &cnt {
                if *v > max_cnt {
                    max_cnt = *v;
                    input_format.delimeter = *k;
                }
            }
        }
    }

    input_format.header = first_line
        .split(input_format.delimeter)
        .any(|field| field.parse::<Feature>().is_ok());

    input_format
}

/// Guess the input format of a data file from its first two lines.
///
/// # Error
/// Raise error if the file cannot be read.
pub fn infer(file_name: &str) -> Result<InputFormat> {
    let file = File::open(file_name)?;
    let mut reader = BufReader::new(file);

    let mut first_line = String::new();
    reader.read_line(&mut first_line)?;
    let mut second_line = String::new();
    reader.read_line(&mut second_line)?;

    let fmt = infer_lines(&first_line, &second_line);
    debug!("inferred format of {}: {:?}", file_name, fmt);
    Ok(fmt)
}

fn parse_record(line: &str, line_no: usize, input_format: InputFormat) -> Result<TrainingRecord> {
    let mut v: Vec<String> = line
        .split(input_format.delimeter)
        .map(|x| x.trim().to_ascii_uppercase())
        .collect();
    if v.len() != COLUMNS {
        return Err(BayesError::BadRecord {
            line: line_no,
            fields: v.len(),
        });
    }
    let label: Label = v.remove(input_format.label_idx).parse()?;
    Ok(TrainingRecord {
        weather: v.remove(0),
        temperature: v.remove(0),
        humidity: v.remove(0),
        wind: v.remove(0),
        plays_golf: label,
    })
}

/// Load a training set from delimited text. Blank lines are skipped.
///
/// # Error
/// `BadLabelIndex` if `label_idx` is not one of the five columns, `BadRecord`
/// for a line without exactly five columns, `InvalidLabel` for a label other
/// than YES or NO, and the [TrainingSet] validation errors.
///
/// [TrainingSet]: ../dataset/struct.TrainingSet.html
pub fn load_csv<R: Read>(reader: R, input_format: InputFormat) -> Result<TrainingSet> {
    if input_format.label_idx >= COLUMNS {
        return Err(BayesError::BadLabelIndex(input_format.label_idx));
    }
    let reader = BufReader::new(reader);
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let content = line?;
        if i == 0 && input_format.header {
            continue;
        }
        if content.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&content, i + 1, input_format)?);
    }
    debug!("parsed {} training records", records.len());
    TrainingSet::new(records)
}

/// Load a training set file with a certain input format.
///
/// # Error
/// Raise error if the file cannot be opened or parsed.
pub fn load(file_name: &str, input_format: InputFormat) -> Result<TrainingSet> {
    let file = File::open(file_name)?;
    load_csv(file, input_format)
}
