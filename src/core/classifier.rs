//! Risk Classification
//!
//! Maps a bounded risk score to a discrete level and derives security
//! recommendations from the finding texts.

use crate::models::types::RiskLevel;

/// Map a score in [0, 100] to a risk level.
/// Band boundaries are inclusive on the upper side: 25 is still LOW,
/// 50 is still MEDIUM, 75 is still HIGH.
pub fn classify(score: u8) -> RiskLevel {
    match score {
        0 => RiskLevel::Safe,
        1..=25 => RiskLevel::Low,
        26..=50 => RiskLevel::Medium,
        51..=75 => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}

/// Derive recommendations from a score and its findings.
///
/// A zero score yields the single all-clear line. Otherwise category
/// blocks are emitted for each threat type present in the findings
/// (matched by substring), followed by the general hygiene block.
/// Output order is deterministic: phishing, honeypot, rugpull, general.
pub fn recommend(score: u8, findings: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score == 0 {
        recommendations
            .push("✅ Wallet appears safe - no suspicious activity detected".to_string());
        return recommendations;
    }

    if findings.iter().any(|f| f.contains("Phishing scam")) {
        recommendations.push(
            "🚨 IMMEDIATE ACTION: Revoke all token approvals to suspicious contracts".to_string(),
        );
        recommendations.push(
            "🔒 Check for unauthorized transactions and report if funds are missing".to_string(),
        );
    }

    if findings.iter().any(|f| f.contains("Honeypot")) {
        recommendations
            .push("⚠️ Be cautious - some contracts may be designed to trap users".to_string());
        recommendations.push("🔍 Research contracts before interacting with them".to_string());
    }

    if findings.iter().any(|f| f.contains("Rugpull")) {
        recommendations.push(
            "💸 Potential rugpull detected - avoid similar contracts in the future".to_string(),
        );
        recommendations.push("📚 Learn about common DeFi scams and red flags".to_string());
    }

    recommendations.push("🔐 Use hardware wallets for large holdings".to_string());
    recommendations.push("📱 Enable 2FA on all exchange accounts".to_string());
    recommendations.push("🔍 Always verify contract addresses before transactions".to_string());
    recommendations.push("🧹 Review and revoke stale token approvals periodically".to_string());

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(0), RiskLevel::Safe);
        assert_eq!(classify(1), RiskLevel::Low);
        assert_eq!(classify(25), RiskLevel::Low);
        assert_eq!(classify(26), RiskLevel::Medium);
        assert_eq!(classify(50), RiskLevel::Medium);
        assert_eq!(classify(51), RiskLevel::High);
        assert_eq!(classify(75), RiskLevel::High);
        assert_eq!(classify(76), RiskLevel::Critical);
        assert_eq!(classify(100), RiskLevel::Critical);
    }

    #[test]
    fn test_safe_wallet_single_recommendation() {
        let recs = recommend(0, &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("no suspicious activity"));
    }

    #[test]
    fn test_general_hygiene_always_present_when_risky() {
        let recs = recommend(10, &["⚠️ High frequency trading detected".to_string()]);
        // No category blocks fire, just the four general items
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("hardware wallets"));
    }

    #[test]
    fn test_phishing_block() {
        let findings = vec!["⚠️ Interaction with 0x12345678... - Phishing scam detected".to_string()];
        let recs = recommend(30, &findings);
        assert_eq!(recs.len(), 6);
        assert!(recs[0].contains("Revoke all token approvals"));
        assert!(recs[1].contains("unauthorized transactions"));
    }

    #[test]
    fn test_category_blocks_are_additive_and_ordered() {
        let findings = vec![
            "⚠️ Interaction with 0x22222222... - Rugpull contract detected".to_string(),
            "⚠️ Interaction with 0x11111111... - Honeypot contract detected".to_string(),
            "⚠️ Interaction with 0x12345678... - Phishing scam detected".to_string(),
        ];
        let recs = recommend(75, &findings);
        // 3 category blocks of 2 each + 4 general items
        assert_eq!(recs.len(), 10);
        // Deterministic order regardless of finding order
        assert!(recs[0].contains("IMMEDIATE ACTION"));
        assert!(recs[2].contains("Be cautious"));
        assert!(recs[4].contains("rugpull"));
        assert!(recs[6].contains("hardware wallets"));
    }
}
