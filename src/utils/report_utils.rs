use crate::models::{AuditResult, TechStack};
use crate::services::{classify_metric, classify_score, METRIC_KEYS};
use std::collections::BTreeSet;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Renders the console report for one audit.
pub fn render_report(result: &AuditResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", heavy);
    let _ = writeln!(out, "📊 WEBSITE AUDIT REPORT");
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "\n🌐 URL: {}", result.url);
    let _ = writeln!(out, "📱 Strategy: {}", result.strategy);
    let _ = writeln!(out, "🕐 Timestamp: {}", result.timestamp.to_rfc3339());
    let _ = writeln!(out, "🔗 Final URL: {}", result.final_url);

    section(&mut out, &light, "📈 SCORES");
    let scores = result.scores.entries();
    if scores.is_empty() {
        let _ = writeln!(out, "ℹ️  No category scores reported");
    }
    for (label, score) in scores {
        let _ = writeln!(
            out,
            "{} {:20} {:5.1}/100",
            classify_score(score).emoji(),
            label,
            score
        );
    }

    section(&mut out, &light, "⚡ PERFORMANCE METRICS");
    for key in METRIC_KEYS {
        let Some(metric) = result.metrics.get(key) else {
            continue;
        };
        let Some(display) = metric.display_value.as_deref() else {
            continue;
        };
        let emoji = classify_metric(key, metric)
            .map(|tier| tier.emoji())
            .unwrap_or("📊");
        let _ = writeln!(out, "{} {:30} {}", emoji, title_case(key), display);
    }

    section(&mut out, &light, "🔧 DETECTED TECHNOLOGIES");
    write_tech_stack(&mut out, &result.tech_stack);

    let _ = writeln!(out, "\n{}", heavy);
    out
}

pub fn print_report(result: &AuditResult) {
    print!("{}", render_report(result));
}

fn section(out: &mut String, rule: &str, title: &str) {
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", rule);
}

fn write_tech_stack(out: &mut String, tech: &TechStack) {
    if !tech.frameworks.is_empty() {
        let _ = writeln!(out, "⚛️  Frameworks: {}", join(&tech.frameworks));
    }
    if !tech.libraries.is_empty() {
        let _ = writeln!(out, "📚 Libraries: {}", join(&tech.libraries));
    }
    if let Some(server) = &tech.server {
        let _ = writeln!(out, "🖥️  Server: {}", server);
    }
    if let Some(cms) = &tech.cms {
        let _ = writeln!(out, "📝 CMS: {}", cms);
    }
    if tech.frameworks.is_empty() && tech.libraries.is_empty() && tech.cms.is_none() {
        let _ = writeln!(out, "ℹ️  No major frameworks or libraries detected");
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

// "first-contentful-paint" -> "First Contentful Paint"
fn title_case(id: &str) -> String {
    id.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
