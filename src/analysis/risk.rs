use crate::models::{DigRisk, IssueKind, IssueMap, Posture, RiskLevel, Severity, Tier};

use super::types::{RiskAssessment, SubRisk};

/// Headline verdict: (level, primary obstacle, rewrite directive).
type Verdict = (RiskLevel, &'static str, &'static str);

const THIN_RECORD: Verdict = (
    RiskLevel::Caution,
    "Insufficient materials for complete analysis",
    "Upload full petition and lower court decision for comprehensive evaluation",
);

const THRESHOLD_DEFECT: Verdict = (
    RiskLevel::Critical,
    "Potential jurisdictional or structural defect identified",
    "Address threshold issues before merits arguments",
);

const ORDINARY: Verdict = (
    RiskLevel::Caution,
    "Standard appellate risks present; vehicle quality uncertain",
    "Strengthen circuit split documentation and vehicle presentation",
);

/// Score a classified case. Tier C short-circuits to a thin-record verdict
/// whatever issues were found.
pub fn assess_risk(tier: Tier, issues: &IssueMap, posture: Posture) -> RiskAssessment {
    let has_high_risk = issues.has_high_risk();

    let (level, primary_obstacle, rewrite_directive) = match tier {
        Tier::C => THIN_RECORD,
        _ if has_high_risk => THRESHOLD_DEFECT,
        _ => ORDINARY,
    };

    let dig_risk = if tier == Tier::C || issues.get(IssueKind::Standing) {
        DigRisk::High
    } else if tier == Tier::A && !has_high_risk {
        DigRisk::Low
    } else {
        DigRisk::Medium
    };

    RiskAssessment {
        level,
        dig_risk,
        primary_obstacle,
        rewrite_directive,
        risks: sub_risks(tier, posture),
    }
}

fn sub_risks(tier: Tier, posture: Posture) -> Vec<SubRisk> {
    let full_record = tier == Tier::A;

    vec![
        SubRisk {
            category: "Vehicle Integrity",
            level: if full_record { Severity::Low } else { Severity::Medium },
            confidence: if full_record { "High" } else { "Limited data" },
        },
        SubRisk {
            category: "Circuit Split Quality",
            level: Severity::Medium,
            confidence: "Requires external verification",
        },
        SubRisk {
            category: "Preservation",
            level: if full_record { Severity::Low } else { Severity::Medium },
            confidence: "Check full record",
        },
        SubRisk {
            category: "Mootness Risk",
            level: if posture == Posture::Emergency {
                Severity::High
            } else {
                Severity::Low
            },
            confidence: "Based on posture",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_issue() -> IssueMap {
        IssueKind::ALL
            .into_iter()
            .fold(IssueMap::new(), |m, k| m.with(k))
    }

    #[test]
    fn tier_c_is_always_caution_high() {
        for issues in [IssueMap::new(), every_issue()] {
            for posture in [Posture::Cert, Posture::Emergency] {
                let r = assess_risk(Tier::C, &issues, posture);
                assert_eq!(r.level, RiskLevel::Caution);
                assert_eq!(r.dig_risk, DigRisk::High);
                assert_eq!(r.primary_obstacle, THIN_RECORD.1);
            }
        }
    }

    #[test]
    fn high_risk_issue_is_critical() {
        let issues = IssueMap::new().with(IssueKind::SeparationOfPowers);
        let r = assess_risk(Tier::B, &issues, Posture::Cert);
        assert_eq!(r.level, RiskLevel::Critical);
        assert_eq!(r.rewrite_directive, THRESHOLD_DEFECT.2);
        assert_eq!(r.dig_risk, DigRisk::Medium);
    }

    #[test]
    fn standing_forces_high_dig_even_on_full_record() {
        let issues = IssueMap::new().with(IssueKind::Standing);
        let r = assess_risk(Tier::A, &issues, Posture::Merits);
        assert_eq!(r.level, RiskLevel::Critical);
        assert_eq!(r.dig_risk, DigRisk::High);
    }

    #[test]
    fn full_record_without_threshold_issues_is_low_dig() {
        let issues = IssueMap::new().with(IssueKind::FirstAmendment);
        let r = assess_risk(Tier::A, &issues, Posture::Cert);
        assert_eq!(r.level, RiskLevel::Caution);
        assert_eq!(r.primary_obstacle, ORDINARY.1);
        assert_eq!(r.dig_risk, DigRisk::Low);
    }

    #[test]
    fn four_sub_risks_in_fixed_order() {
        let r = assess_risk(Tier::B, &IssueMap::new(), Posture::Cert);
        let categories: Vec<_> = r.risks.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                "Vehicle Integrity",
                "Circuit Split Quality",
                "Preservation",
                "Mootness Risk"
            ]
        );
        assert_eq!(r.risks[0].confidence, "Limited data");
    }

    #[test]
    fn sub_risk_levels_follow_tier_and_posture() {
        let r = assess_risk(Tier::A, &IssueMap::new(), Posture::Emergency);
        assert_eq!(r.risks[0].level, Severity::Low);
        assert_eq!(r.risks[0].confidence, "High");
        assert_eq!(r.risks[1].level, Severity::Medium);
        assert_eq!(r.risks[2].level, Severity::Low);
        assert_eq!(r.risks[3].level, Severity::High);

        let r = assess_risk(Tier::B, &IssueMap::new(), Posture::Cert);
        assert_eq!(r.risks[2].level, Severity::Medium);
        assert_eq!(r.risks[3].level, Severity::Low);
    }
}
