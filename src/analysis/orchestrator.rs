use crate::models::{Case, CaseInput, PostureRequest};

use super::bench::generate_justice_questions;
use super::classify::{classify_tier, detect_docket, detect_posture};
use super::issues::extract_issues;
use super::precedents::find_precedents;
use super::risk::assess_risk;
use super::traps::generate_traps;
use super::types::CaseAnalysis;

/// Classify the raw input: posture, docket, tier, issues.
pub fn classify_case(input: &CaseInput) -> Case {
    let posture = match input.posture {
        PostureRequest::Auto => detect_posture(&input.text),
        PostureRequest::Declared(p) => p,
    };

    let declared_docket = input.docket.trim();
    let docket = if declared_docket.is_empty() {
        detect_docket(&input.text)
    } else {
        Some(declared_docket.to_string())
    };

    let text_length = input.text.chars().count();
    let tier = classify_tier(text_length, docket.is_some());
    if let Some(requested) = input.tier.filter(|t| *t != tier) {
        tracing::debug!(
            requested = %requested,
            computed = %tier,
            "Ignoring caller-supplied tier"
        );
    }

    Case {
        title: input.title.clone(),
        text_length,
        posture,
        tier,
        docket,
        issues: extract_issues(&input.text),
    }
}

/// Run the full pipeline on one submission.
pub fn analyze(input: &CaseInput) -> CaseAnalysis {
    let case = classify_case(input);
    let risk = assess_risk(case.tier, &case.issues, case.posture);

    let analysis = CaseAnalysis {
        precedents: find_precedents(&case.issues),
        traps: generate_traps(&case.issues),
        justice_questions: generate_justice_questions(&case.issues),
        risk_level: risk.level,
        dig_risk: risk.dig_risk,
        primary_obstacle: risk.primary_obstacle,
        rewrite_directive: risk.rewrite_directive,
        risks: risk.risks,
        issues: case.issues,
        title: case.title,
        tier: case.tier,
        posture: case.posture,
        docket: case.docket,
    };

    tracing::info!(
        tier = %analysis.tier,
        posture = %analysis.posture,
        risk = %analysis.risk_level,
        issues = analysis.issues.present().count(),
        text_length = case.text_length,
        "Case analysis complete"
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DigRisk, IssueKind, Posture, RiskLevel, Tier, TrapKind};

    #[test]
    fn short_plain_text_end_to_end() {
        let input = CaseInput::new("A short note about a dispute between some parties.");
        assert_eq!(input.text.chars().count(), 50);

        let a = analyze(&input);
        assert_eq!(a.tier, Tier::C);
        assert_eq!(a.posture, Posture::Cert);
        assert_eq!(a.risk_level, RiskLevel::Caution);
        assert_eq!(a.dig_risk, DigRisk::High);
        assert_eq!(a.precedents.len(), 1);
        assert!(a.precedents[0].case.starts_with("Marbury v. Madison"));
        assert_eq!(a.traps.len(), 2);
        assert_eq!(a.traps[0].kind, TrapKind::Trap);
        assert!(a.traps[0].text.contains("circuit split"));
        assert_eq!(a.justice_questions.len(), 4);
        assert_eq!(a.risks.len(), 4);
        assert_eq!(a.docket, None);
        assert_eq!(a.title, "Untitled Case");
    }

    #[test]
    fn identical_input_serialises_identically() {
        let input = CaseInput::new("Emergency application. Standing is contested. ".repeat(40))
            .with_title("Doe v. Roe");
        let first = serde_json::to_string(&analyze(&input)).unwrap();
        let second = serde_json::to_string(&analyze(&input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn declared_posture_overrides_detection() {
        let input = CaseInput::new("cert petition")
            .with_posture(PostureRequest::Declared(Posture::Backtest));
        assert_eq!(analyze(&input).posture, Posture::Backtest);
    }

    #[test]
    fn docket_is_declared_or_detected() {
        let detected = classify_case(&CaseInput::new("Petition in No. 24-109."));
        assert_eq!(detected.docket.as_deref(), Some("24-109"));

        let declared = classify_case(&CaseInput::new("No. 24-109").with_docket(" 22-1 "));
        assert_eq!(declared.docket.as_deref(), Some("22-1"));
    }

    #[test]
    fn requested_tier_is_ignored() {
        let mut input = CaseInput::new("tiny");
        input.tier = Some(Tier::A);
        assert_eq!(analyze(&input).tier, Tier::C);
    }

    #[test]
    fn tier_counts_characters_not_bytes() {
        // 600 two-byte characters: 1200 bytes but only 600 chars.
        let input = CaseInput::new("é".repeat(600));
        let case = classify_case(&input);
        assert_eq!(case.text_length, 600);
        assert_eq!(case.tier, Tier::C);
    }

    #[test]
    fn mid_sized_record_with_threshold_issue_is_critical() {
        let text = format!(
            "Brief for Petitioner. The removal protections raise separation of powers concerns. {}",
            "x".repeat(2_000)
        );
        let a = analyze(&CaseInput::new(text));
        assert_eq!(a.tier, Tier::B);
        assert_eq!(a.posture, Posture::Merits);
        assert_eq!(a.risk_level, RiskLevel::Critical);
        assert_eq!(a.dig_risk, DigRisk::Medium);
        assert!(a.issues.get(IssueKind::SeparationOfPowers));
        assert_eq!(a.precedents[0].issue, Some(IssueKind::SeparationOfPowers));
    }

    #[test]
    fn report_json_shape() {
        let json = serde_json::to_value(analyze(&CaseInput::new("No. 24-109"))).unwrap();
        for key in [
            "title",
            "tier",
            "posture",
            "docket",
            "riskLevel",
            "digRisk",
            "primaryObstacle",
            "rewriteDirective",
            "precedents",
            "traps",
            "risks",
            "justiceQuestions",
            "issues",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["traps"][0]["type"], "trap");
        assert_eq!(json["issues"].as_object().unwrap().len(), 8);
        assert!(json.get("timestamp").is_none());
    }
}
