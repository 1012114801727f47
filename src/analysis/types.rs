use serde::Serialize;

use crate::models::{DigRisk, IssueKind, IssueMap, Posture, RiskLevel, Severity, Tier, TrapKind};

/// A citation as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecedentRef {
    pub case: &'static str,
    pub url: &'static str,
    pub relevance: &'static str,
    pub risk: Severity,
    /// `None` for the fallback citation.
    pub issue: Option<IssueKind>,
}

/// One line of the trap/counter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trap {
    #[serde(rename = "type")]
    pub kind: TrapKind,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubRisk {
    pub category: &'static str,
    pub level: Severity,
    pub confidence: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub dig_risk: DigRisk,
    pub primary_obstacle: &'static str,
    pub rewrite_directive: &'static str,
    pub risks: Vec<SubRisk>,
}

/// A simulated bench question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JusticeQuestion {
    pub justice: &'static str,
    pub name: &'static str,
    pub focus: &'static str,
    pub question: &'static str,
    pub pressure: &'static str,
}

/// Full report for one case. Contains no clock reads, so the same input
/// always serialises to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysis {
    pub title: String,
    pub tier: Tier,
    pub posture: Posture,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docket: Option<String>,
    pub risk_level: RiskLevel,
    pub dig_risk: DigRisk,
    pub primary_obstacle: &'static str,
    pub rewrite_directive: &'static str,
    pub precedents: Vec<PrecedentRef>,
    pub traps: Vec<Trap>,
    pub risks: Vec<SubRisk>,
    pub justice_questions: Vec<JusticeQuestion>,
    pub issues: IssueMap,
}
