// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod pagespeed;

pub use compute::{
    classify_metric, classify_score, detect_tech_stack, extract_result, Tier, TechStackDetector,
    METRIC_KEYS,
};
pub use pagespeed::{Auditor, StrategyOutcomes};
