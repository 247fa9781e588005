use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

use crate::dataset::{Feature, Label};

pub type Result<T> = std::result::Result<T, BayesError>;

#[derive(Debug)]
pub enum BayesError {
    InvalidLabel(String),
    DegenerateNormalization,
    InvalidConfig(String),
    UnknownFeature(String),
    MissingFeature(Feature),
    EmptyField { record: usize, feature: String },
    MissingClass(Label),
    BadRecord { line: usize, fields: usize },
    BadLabelIndex(usize),
    IO(io::Error),
    SerdeJson(serde_json::Error),
}

impl From<serde_json::Error> for BayesError {
    fn from(err: serde_json::Error) -> BayesError {
        BayesError::SerdeJson(err)
    }
}

impl From<io::Error> for BayesError {
    fn from(err: io::Error) -> BayesError {
        BayesError::IO(err)
    }
}

impl Display for BayesError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            BayesError::InvalidLabel(ref s) => {
                write!(f, "Invalid label [{}], expected YES or NO", s)
            }
            BayesError::DegenerateNormalization => {
                write!(f, "Both posteriors are zero, cannot normalize")
            }
            BayesError::InvalidConfig(ref s) => write!(f, "Invalid config: {}", s),
            BayesError::UnknownFeature(ref s) => write!(f, "Unknown feature [{}]", s),
            BayesError::MissingFeature(ref feat) => {
                write!(f, "Missing value for feature {}", feat.name())
            }
            BayesError::EmptyField {
                record,
                ref feature,
            } => write!(f, "Record {} has an empty {} field", record, feature),
            BayesError::MissingClass(ref label) => {
                write!(f, "Training set has no record labeled {}", label.as_str())
            }
            BayesError::BadRecord { line, fields } => {
                write!(f, "Line {} has {} fields, expected 5", line, fields)
            }
            BayesError::BadLabelIndex(idx) => {
                write!(f, "Label index {} is out of range, expected 0 to 4", idx)
            }
            BayesError::IO(ref e) => write!(f, "IO error: {}", e),
            BayesError::SerdeJson(ref e) => write!(f, "SerdeJson error: {}", e),
        }
    }
}

impl Error for BayesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BayesError::IO(ref e) => Some(e),
            BayesError::SerdeJson(ref e) => Some(e),
            _ => None,
        }
    }
}
