use crate::models::MetricValue;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const GOOD_SCORE: f64 = 90.0;
pub const NEEDS_IMPROVEMENT_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Good,
    NeedsImprovement,
    Poor,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::NeedsImprovement => "needs-improvement",
            Tier::Poor => "poor",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Good => "🟢",
            Tier::NeedsImprovement => "🟡",
            Tier::Poor => "🔴",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a 0-100 category score. Lower bounds are inclusive: 90 is
/// good and 50 needs improvement.
pub fn classify_score(score: f64) -> Tier {
    if score >= GOOD_SCORE {
        Tier::Good
    } else if score >= NEEDS_IMPROVEMENT_SCORE {
        Tier::NeedsImprovement
    } else {
        Tier::Poor
    }
}

/// Upper bounds for a lower-is-better metric, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricThresholds {
    pub good: f64,
    pub needs_improvement: f64,
}

impl MetricThresholds {
    pub fn classify(&self, value: f64) -> Tier {
        if value <= self.good {
            Tier::Good
        } else if value <= self.needs_improvement {
            Tier::NeedsImprovement
        } else {
            Tier::Poor
        }
    }
}

// Web Vitals guidance; times in milliseconds, CLS unitless
pub fn metric_thresholds(metric_id: &str) -> Option<MetricThresholds> {
    let (good, needs_improvement) = match metric_id {
        "first-contentful-paint" => (1800.0, 3000.0),
        "largest-contentful-paint" => (2500.0, 4000.0),
        "total-blocking-time" => (200.0, 600.0),
        "cumulative-layout-shift" => (0.1, 0.25),
        "speed-index" => (3400.0, 5800.0),
        _ => return None,
    };
    Some(MetricThresholds {
        good,
        needs_improvement,
    })
}

/// Tier of a metric from its numeric value when the metric has a known
/// threshold, otherwise from the upstream 0-1 score. `None` when neither
/// applies.
pub fn classify_metric(metric_id: &str, metric: &MetricValue) -> Option<Tier> {
    match metric_thresholds(metric_id) {
        Some(thresholds) => Some(thresholds.classify(metric.value)),
        None => metric.score.map(|score| classify_score(score * 100.0)),
    }
}
