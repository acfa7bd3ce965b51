use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total interaction clicks recorded on one offset day of a module presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: i64,
    pub clicks: i64,
}

/// Accumulates clicks per day; rows for the same day add up.
#[derive(Debug, Default)]
pub struct DailyClicks(BTreeMap<i64, i64>);

impl DailyClicks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, day: i64, clicks: i64) {
        let total = self.0.entry(day).or_insert(0);
        *total = total.saturating_add(clicks);
    }

    /// The accumulated series, ascending by day.
    pub fn into_trend(self) -> Vec<TrendPoint> {
        self.0
            .into_iter()
            .map(|(day, clicks)| TrendPoint { day, clicks })
            .collect()
    }
}
