pub mod site_audit_service;

pub use site_audit_service::{
    classify_metric, classify_score, detect_tech_stack, extract_result, Auditor,
    StrategyOutcomes, TechStackDetector, Tier, METRIC_KEYS,
};
