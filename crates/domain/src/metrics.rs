use std::collections::BTreeMap;

use chrono::NaiveDate;

/// A logged body-metric sample.
///
/// All measurements are optional. A missing value means "no data" and is
/// excluded from the aggregates that would use it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub date: NaiveDate,
    pub weight: Option<f32>,
    pub body_fat: Option<f32>,
    pub strength: BTreeMap<String, f32>,
}

impl MetricSample {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            body_fat: None,
            strength: BTreeMap::new(),
        }
    }
}

#[must_use]
pub fn most_recent_weight(metrics: &[MetricSample]) -> Option<f32> {
    metrics
        .iter()
        .filter(|m| m.weight.is_some())
        .max_by(|a, b| a.date.cmp(&b.date))
        .and_then(|m| m.weight)
}
