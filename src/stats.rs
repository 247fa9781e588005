//! Aggregate label counts over a training set, for display.

use crate::dataset::{Label, TrainingSet};
use crate::errors::Result;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub yes_count: usize,
    pub no_count: usize,
    pub yes_percent: u32,
    pub no_percent: u32,
}

impl Stats {
    /// Count the labels in `data`. Percentages are rounded to whole numbers
    /// independently of each other.
    ///
    /// # Example
    /// ```rust
    /// use golf_bayes::dataset::GOLF;
    /// use golf_bayes::stats::Stats;
    /// let stats = Stats::of(&GOLF);
    /// assert_eq!((stats.total, stats.yes_count, stats.no_count), (14, 9, 5));
    /// assert_eq!((stats.yes_percent, stats.no_percent), (64, 36));
    /// ```
    pub fn of(data: &TrainingSet) -> Stats {
        let total = data.len();
        let yes_count = data.count(Label::Yes);
        let no_count = data.count(Label::No);
        Stats {
            total,
            yes_count,
            no_count,
            yes_percent: percent(yes_count, total),
            no_percent: percent(no_count, total),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_string(&self) -> String {
        let mut s = String::from("");
        s.push_str(&format!("total records = {}\n", self.total));
        s.push_str(&format!(
            "YES = {} ({}%)\n",
            self.yes_count, self.yes_percent
        ));
        s.push_str(&format!("NO = {} ({}%)\n", self.no_count, self.no_percent));
        s
    }
}

fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}
