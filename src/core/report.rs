//! Security Report Formatting
//!
//! Renders address, score, findings and recommendations into the
//! fixed-layout text report. Pure formatting: no I/O, deterministic.

use crate::core::classifier::classify;

const BANNER_WIDTH: usize = 50;

/// Render the wallet security report.
pub fn format_report(
    address: &str,
    score: u8,
    findings: &[String],
    recommendations: &[String],
) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut report = Vec::new();

    report.push(banner.clone());
    report.push("🔒 WALLET SENTRY SECURITY REPORT".to_string());
    report.push(banner.clone());
    report.push(format!("Address: {}", address));
    report.push(format!("Risk Score: {}/100", score));
    report.push(format!("Risk Level: {}", classify(score).label()));
    report.push("👨‍💻 Analyzed by: Wallet Sentry".to_string());
    report.push(String::new());

    if findings.is_empty() {
        report.push("✅ No security issues detected".to_string());
    } else {
        report.push("🚨 SECURITY FINDINGS:".to_string());
        for finding in findings {
            report.push(format!("  {}", finding));
        }
    }

    report.push(String::new());
    report.push("💡 RECOMMENDATIONS:".to_string());
    for recommendation in recommendations {
        report.push(format!("  {}", recommendation));
    }

    report.push(String::new());
    report.push(banner.clone());
    report.push("Report generated by Wallet Sentry".to_string());
    report.push(banner);

    report.join("\n")
}
