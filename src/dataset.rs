//! This module defines the categorical training data: the four weather features,
//! the two outcome labels, and the shipped 14 record golf table.
//!
//! # Example
//! ```rust
//! use golf_bayes::dataset::{Feature, Label, GOLF};
//! assert_eq!(GOLF.len(), 14);
//! assert_eq!(GOLF.count(Label::Yes), 9);
//! assert_eq!(GOLF.domain_size(Feature::Weather), 3);
//! ```

use std::collections::BTreeSet;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::errors::{BayesError, Result};

/// The predictor features, in column order.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Weather,
    Temperature,
    Humidity,
    Wind,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Weather,
        Feature::Temperature,
        Feature::Humidity,
        Feature::Wind,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Weather => "weather",
            Feature::Temperature => "temperature",
            Feature::Humidity => "humidity",
            Feature::Wind => "wind",
        }
    }

    /// The declared categories of the feature. Only used when the config asks
    /// for a fixed smoothing domain; the default counts observed values.
    pub fn domain(self) -> &'static [&'static str] {
        match self {
            Feature::Weather => &["SUNNY", "OVERCAST", "RAINY"],
            Feature::Temperature => &["HOT", "MILD", "COOL"],
            Feature::Humidity => &["HIGH", "NORMAL"],
            Feature::Wind => &["YES", "NO"],
        }
    }
}

impl FromStr for Feature {
    type Err = BayesError;

    fn from_str(s: &str) -> Result<Feature> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weather" => Ok(Feature::Weather),
            "temperature" => Ok(Feature::Temperature),
            "humidity" => Ok(Feature::Humidity),
            "wind" => Ok(Feature::Wind),
            _ => Err(BayesError::UnknownFeature(s.to_string())),
        }
    }
}

/// The outcome: does golf get played.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Yes,
    No,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Yes, Label::No];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Yes => "YES",
            Label::No => "NO",
        }
    }
}

impl FromStr for Label {
    type Err = BayesError;

    /// Anything but YES or NO (case-insensitive) is rejected.
    fn from_str(s: &str) -> Result<Label> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(Label::Yes),
            "NO" => Ok(Label::No),
            _ => Err(BayesError::InvalidLabel(s.to_string())),
        }
    }
}

/// One labeled observation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub weather: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub plays_golf: Label,
}

impl TrainingRecord {
    pub fn new(
        weather: &str,
        temperature: &str,
        humidity: &str,
        wind: &str,
        plays_golf: Label,
    ) -> TrainingRecord {
        TrainingRecord {
            weather: weather.to_string(),
            temperature: temperature.to_string(),
            humidity: humidity.to_string(),
            wind: wind.to_string(),
            plays_golf,
        }
    }

    pub fn value(&self, feature: Feature) -> &str {
        match feature {
            Feature::Weather => &self.weather,
            Feature::Temperature => &self.temperature,
            Feature::Humidity => &self.humidity,
            Feature::Wind => &self.wind,
        }
    }
}

/// An immutable, validated sequence of training records.
///
/// Both labels are guaranteed to occur, so every prior is strictly positive.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSet {
    records: Vec<TrainingRecord>,
}

impl TrainingSet {
    /// Build a training set, rejecting empty fields and sets missing a label.
    ///
    /// # Example
    /// ```rust
    /// use golf_bayes::dataset::{Label, TrainingRecord, TrainingSet};
    /// let set = TrainingSet::new(vec![
    ///     TrainingRecord::new("SUNNY", "HOT", "HIGH", "NO", Label::No),
    ///     TrainingRecord::new("OVERCAST", "HOT", "HIGH", "NO", Label::Yes),
    /// ]).unwrap();
    /// assert_eq!(set.len(), 2);
    ///
    /// let lopsided = TrainingSet::new(vec![
    ///     TrainingRecord::new("SUNNY", "HOT", "HIGH", "NO", Label::No),
    /// ]);
    /// assert!(lopsided.is_err());
    /// ```
    pub fn new(records: Vec<TrainingRecord>) -> Result<TrainingSet> {
        for (i, record) in records.iter().enumerate() {
            for feat in Feature::ALL.iter() {
                if record.value(*feat).trim().is_empty() {
                    return Err(BayesError::EmptyField {
                        record: i,
                        feature: feat.name().to_string(),
                    });
                }
            }
        }
        let set = TrainingSet { records };
        for label in Label::ALL.iter() {
            if set.count(*label) == 0 {
                return Err(BayesError::MissingClass(*label));
            }
        }
        Ok(set)
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records bearing `label`, in training order.
    pub fn class_subset(&self, label: Label) -> impl Iterator<Item = &TrainingRecord> {
        self.records.iter().filter(move |r| r.plays_golf == label)
    }

    pub fn count(&self, label: Label) -> usize {
        self.class_subset(label).count()
    }

    /// Distinct values `feature` takes across the whole set.
    pub fn observed_values(&self, feature: Feature) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.value(feature)).collect()
    }

    pub fn domain_size(&self, feature: Feature) -> usize {
        self.observed_values(feature).len()
    }
}

const GOLF_ROWS: [[&str; 5]; 14] = [
    ["RAINY", "HOT", "HIGH", "NO", "YES"],
    ["RAINY", "HOT", "HIGH", "YES", "NO"],
    ["OVERCAST", "HOT", "HIGH", "NO", "YES"],
    ["SUNNY", "MILD", "HIGH", "NO", "NO"],
    ["SUNNY", "COOL", "NORMAL", "NO", "YES"],
    ["SUNNY", "COOL", "NORMAL", "YES", "NO"],
    ["OVERCAST", "COOL", "NORMAL", "YES", "YES"],
    ["RAINY", "MILD", "HIGH", "NO", "NO"],
    ["RAINY", "COOL", "NORMAL", "NO", "YES"],
    ["SUNNY", "MILD", "NORMAL", "NO", "YES"],
    ["RAINY", "MILD", "NORMAL", "YES", "YES"],
    ["OVERCAST", "MILD", "HIGH", "YES", "YES"],
    ["OVERCAST", "HOT", "NORMAL", "NO", "YES"],
    ["SUNNY", "COOL", "HIGH", "YES", "NO"],
];

/// The shipped golf table, built on first use and never mutated.
pub static GOLF: Lazy<TrainingSet> = Lazy::new(|| {
    let records = GOLF_ROWS
        .iter()
        .map(|row| TrainingRecord {
            weather: row[0].to_string(),
            temperature: row[1].to_string(),
            humidity: row[2].to_string(),
            wind: row[3].to_string(),
            plays_golf: if row[4] == "YES" { Label::Yes } else { Label::No },
        })
        .collect();
    TrainingSet { records }
});
