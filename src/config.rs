//! This module implements the config for the naive bayes classifier.
//!
//! The defaults reproduce plain Laplace smoothing over the feature values
//! observed in the training set, with percentages rounded to two decimals.
//!
//! # Example
//! ```rust
//! use golf_bayes::config::{Config, DomainSize};
//! let mut cfg = Config::new();
//! cfg.set_precision(3).unwrap();
//! cfg.set_domain_size("Fixed");
//! assert_eq!(cfg.domain_size, DomainSize::Fixed);
//! println!("{}", cfg.to_string());
//! ```

use std::fs::File;
use std::io::BufReader;

use crate::errors::{BayesError, Result};

/// Most decimal places a percentage can be rounded to.
pub const MAX_PRECISION: u32 = 15;

/// How the smoothing denominator counts the values of a feature.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainSize {
    /// Distinct values observed anywhere in the training set.
    Observed,
    /// The declared domain of the feature, plus any observed value outside it.
    Fixed,
}

impl Default for DomainSize {
    fn default() -> Self {
        DomainSize::Observed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub smoothing: f64,
    pub precision: u32,
    pub domain_size: DomainSize,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

pub fn string2domain(s: &str) -> DomainSize {
    match s {
        "Observed" => DomainSize::Observed,
        "Fixed" => DomainSize::Fixed,
        _ => DomainSize::Observed,
    }
}

pub fn domain2string(d: &DomainSize) -> String {
    match d {
        DomainSize::Observed => String::from("Observed"),
        DomainSize::Fixed => String::from("Fixed"),
    }
}

impl Config {
    pub fn new() -> Config {
        Config {
            smoothing: 1.0,
            precision: 2,
            domain_size: DomainSize::Observed,
            debug: false,
        }
    }

    /// Parse a config from json. Missing fields keep their defaults.
    ///
    /// # Example
    /// ```rust
    /// use golf_bayes::config::Config;
    /// let cfg = Config::from_json(r#"{"precision": 4}"#).unwrap();
    /// assert_eq!(cfg.precision, 4);
    /// assert_eq!(cfg.smoothing, 1.0);
    /// ```
    pub fn from_json(s: &str) -> Result<Config> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a json config file.
    pub fn load(file_name: &str) -> Result<Config> {
        let file = File::open(file_name)?;
        let reader = BufReader::new(file);
        let cfg: Config = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that smoothing is finite and non-negative and that precision is
    /// at most [MAX_PRECISION](constant.MAX_PRECISION.html).
    ///
    /// # Example
    /// ```rust
    /// use golf_bayes::config::Config;
    /// let mut cfg = Config::new();
    /// assert!(cfg.validate().is_ok());
    /// cfg.smoothing = -0.5;
    /// assert!(cfg.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing < 0.0 {
            return Err(BayesError::InvalidConfig(format!(
                "smoothing must be finite and >= 0, got {}",
                self.smoothing
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(BayesError::InvalidConfig(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }

    pub fn set_smoothing(&mut self, alpha: f64) -> Result<()> {
        let old = self.smoothing;
        self.smoothing = alpha;
        self.validate().map_err(|e| {
            self.smoothing = old;
            e
        })
    }

    pub fn set_precision(&mut self, digits: u32) -> Result<()> {
        let old = self.precision;
        self.precision = digits;
        self.validate().map_err(|e| {
            self.precision = old;
            e
        })
    }

    pub fn set_domain_size(&mut self, d: &str) {
        self.domain_size = string2domain(d);
    }

    pub fn set_debug(&mut self, option: bool) {
        self.debug = option;
    }

    pub fn to_string(&self) -> String {
        let mut s = String::from("");
        s.push_str(&format!("smoothing = {}\n", self.smoothing));
        s.push_str(&format!("precision = {}\n", self.precision));
        s.push_str(&format!(
            "domain size = {}\n",
            domain2string(&self.domain_size)
        ));
        s.push_str(&format!("debug enabled = {}\n", self.debug));
        s
    }
}
