pub mod extract;
pub mod tech_stack;
pub mod tiers;

pub use extract::{extract_metrics, extract_result, extract_scores, CATEGORY_KEYS, METRIC_KEYS};
pub use tech_stack::{detect_tech_stack, TechStackDetector};
pub use tiers::{classify_metric, classify_score, metric_thresholds, MetricThresholds, Tier};
