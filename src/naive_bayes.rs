//! This module implements a categorical naive bayes classifier over a [TrainingSet].
//!
//! For each label `c` the unnormalized posterior is
//! `prior(c) * Π likelihood(feature_i, value_i, c)`. The likelihoods use additive
//! smoothing, `(count + α) / (class_size + α * domain_size)`, where the domain size
//! of a feature is counted over the whole training set so both labels share it.
//!
//! The two posteriors are normalized to percentages and each is rounded on its
//! own, so the displayed pair need not add up to exactly 100.
//!
//! [TrainingSet]: ../dataset/struct.TrainingSet.html
//!
//! # Example
//! ```rust
//! use golf_bayes::config::Config;
//! use golf_bayes::dataset::{Label, GOLF};
//! use golf_bayes::naive_bayes::{NaiveBayes, Query};
//!
//! let cfg = Config::new();
//! let nb = NaiveBayes::new(&cfg, &GOLF);
//! let query = Query::new("RAINY", "HOT", "HIGH", "NO");
//! let prediction = nb.predict(&query).unwrap();
//!
//! assert_eq!(prediction.decision, Label::Yes);
//! assert_eq!(prediction.probability_yes, 61.72);
//! assert_eq!(prediction.probability_no, 38.28);
//! ```

use std::collections::HashMap;

use log::{debug, trace};

use crate::config::{Config, DomainSize, MAX_PRECISION};
use crate::dataset::{Feature, Label, TrainingSet};
use crate::errors::{BayesError, Result};

/// The four feature values to classify.
///
/// Values are compared verbatim against the training data. A value the
/// training set never saw is not an error, it just matches nothing.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Query {
    pub weather: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}

impl Query {
    pub fn new(weather: &str, temperature: &str, humidity: &str, wind: &str) -> Query {
        Query {
            weather: weather.to_string(),
            temperature: temperature.to_string(),
            humidity: humidity.to_string(),
            wind: wind.to_string(),
        }
    }

    /// Build a query from `(feature name, value)` pairs given in any order.
    ///
    /// # Example
    /// ```rust
    /// use golf_bayes::naive_bayes::Query;
    /// let q = Query::from_fields(&[
    ///     ("wind", "NO"),
    ///     ("humidity", "HIGH"),
    ///     ("weather", "RAINY"),
    ///     ("temperature", "HOT"),
    /// ]).unwrap();
    /// assert_eq!(q, Query::new("RAINY", "HOT", "HIGH", "NO"));
    /// ```
    ///
    /// # Error
    /// Unknown or repeated feature names give `UnknownFeature`, absent ones
    /// give `MissingFeature`.
    pub fn from_fields(fields: &[(&str, &str)]) -> Result<Query> {
        let mut values: HashMap<Feature, &str> = HashMap::new();
        for (name, value) in fields {
            let feat: Feature = name.parse()?;
            if values.insert(feat, *value).is_some() {
                return Err(BayesError::UnknownFeature(format!("{} (repeated)", name)));
            }
        }
        let mut get = |feat: Feature| values.remove(&feat).ok_or(BayesError::MissingFeature(feat));
        Ok(Query::new(
            get(Feature::Weather)?,
            get(Feature::Temperature)?,
            get(Feature::Humidity)?,
            get(Feature::Wind)?,
        ))
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

/// Unnormalized posterior scores, `prior * Π likelihood`, one per label.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Posterior {
    pub yes: f64,
    pub no: f64,
}

impl Posterior {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Yes => self.yes,
            Label::No => self.no,
        }
    }
}

/// The classifier output: two independently rounded percentages and the decision.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub probability_yes: f64,
    pub probability_no: f64,
    pub decision: Label,
}

impl Prediction {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_string(&self) -> String {
        let mut s = String::from("");
        s.push_str(&format!("play golf = {}\n", self.decision.as_str()));
        s.push_str(&format!("probability YES = {}%\n", self.probability_yes));
        s.push_str(&format!("probability NO = {}%\n", self.probability_no));
        s
    }
}

/// Round `v` half away from zero to `digits` decimal places. `digits` is
/// capped at [MAX_PRECISION](../config/constant.MAX_PRECISION.html).
pub fn round_to(v: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    (v * scale).round() / scale
}

/// Naive bayes over a borrowed, immutable training set. Holds no mutable
/// state, so one instance can serve any number of threads.
pub struct NaiveBayes<'a> {
    conf: Config,
    data: &'a TrainingSet,
}

impl<'a> NaiveBayes<'a> {
    pub fn new(conf: &Config, data: &'a TrainingSet) -> NaiveBayes<'a> {
        NaiveBayes {
            conf: conf.clone(),
            data,
        }
    }

    /// Fraction of training records labeled `label`. Never zero, since a
    /// [TrainingSet](../dataset/struct.TrainingSet.html) always holds both labels.
    pub fn prior(&self, label: Label) -> f64 {
        self.data.count(label) as f64 / self.data.len() as f64
    }

    /// Prior of a label given as text.
    ///
    /// # Error
    /// `InvalidLabel` for anything but YES or NO.
    pub fn prior_of(&self, label: &str) -> Result<f64> {
        Ok(self.prior(label.parse()?))
    }

    /// Size of the smoothing domain for `feature`, shared by both labels.
    pub fn domain_size(&self, feature: Feature) -> usize {
        let observed = self.data.observed_values(feature);
        match self.conf.domain_size {
            DomainSize::Observed => observed.len(),
            DomainSize::Fixed => {
                let declared = feature.domain();
                let extra = observed.iter().filter(|v| !declared.contains(*v)).count();
                declared.len() + extra
            }
        }
    }

    /// Smoothed estimate of P(feature = value | label).
    ///
    /// # Example
    /// ```rust
    /// use golf_bayes::config::Config;
    /// use golf_bayes::dataset::{Feature, Label, GOLF};
    /// use golf_bayes::naive_bayes::NaiveBayes;
    /// let nb = NaiveBayes::new(&Config::new(), &GOLF);
    /// // 3 of the 9 YES records are RAINY: (3 + 1) / (9 + 3)
    /// assert_eq!(nb.likelihood(Feature::Weather, "RAINY", Label::Yes), 4.0 / 12.0);
    /// // never seen, still positive: (0 + 1) / (9 + 3)
    /// assert_eq!(nb.likelihood(Feature::Weather, "SNOWY", Label::Yes), 1.0 / 12.0);
    /// ```
    pub fn likelihood(&self, feature: Feature, value: &str, label: Label) -> f64 {
        let (matches, class_size) = self
            .data
            .class_subset(label)
            .fold((0usize, 0usize), |(m, n), r| {
                (m + (r.value(feature) == value) as usize, n + 1)
            });
        let alpha = self.conf.smoothing;
        let domain = self.domain_size(feature) as f64;
        (matches as f64 + alpha) / (class_size as f64 + alpha * domain)
    }

    /// Likelihood with the label given as text.
    ///
    /// # Error
    /// `InvalidLabel` for anything but YES or NO.
    pub fn likelihood_of(&self, feature: Feature, value: &str, label: &str) -> Result<f64> {
        Ok(self.likelihood(feature, value, label.parse()?))
    }

    fn score(&self, query: &Query, label: Label) -> f64 {
        Feature::ALL.iter().fold(self.prior(label), |acc, feat| {
            let l = self.likelihood(*feat, query.value(*feat), label);
            trace!("P({}={} | {}) = {}", feat.name(), query.value(*feat), label.as_str(), l);
            acc * l
        })
    }

    /// Unnormalized posterior for both labels.
    pub fn posterior(&self, query: &Query) -> Posterior {
        Posterior {
            yes: self.score(query, Label::Yes),
            no: self.score(query, Label::No),
        }
    }

    /// Classify one query.
    ///
    /// The decision compares the unrounded percentages, YES only when strictly
    /// greater, so a tie goes to NO.
    ///
    /// # Error
    /// `InvalidConfig` if the config fails [Config::validate], and
    /// `DegenerateNormalization` if the posteriors sum to zero or overflow or
    /// the percentages come out non-finite. The latter cannot happen with a
    /// valid config and positive smoothing.
    ///
    /// [Config::validate]: ../config/struct.Config.html#method.validate
    pub fn predict(&self, query: &Query) -> Result<Prediction> {
        self.conf.validate()?;
        let post = self.posterior(query);
        let total = post.yes + post.no;
        if total == 0.0 || !total.is_finite() {
            return Err(BayesError::DegenerateNormalization);
        }
        let percent = |label: Label| post.get(label) / total * 100.0;
        let pct_yes = percent(Label::Yes);
        let pct_no = percent(Label::No);
        let decision = if pct_yes > pct_no { Label::Yes } else { Label::No };

        let prediction = Prediction {
            probability_yes: round_to(pct_yes, self.conf.precision),
            probability_no: round_to(pct_no, self.conf.precision),
            decision,
        };
        if !prediction.probability_yes.is_finite() || !prediction.probability_no.is_finite() {
            return Err(BayesError::DegenerateNormalization);
        }
        if self.conf.debug {
            debug!(
                "{:?}: posterior yes={} no={} -> {}",
                query,
                post.yes,
                post.no,
                decision.as_str()
            );
        }
        Ok(prediction)
    }

    /// Classify each query in order, stopping at the first failure.
    pub fn predict_batch(&self, queries: &[Query]) -> Result<Vec<Prediction>> {
        queries.iter().map(|q| self.predict(q)).collect()
    }
}
