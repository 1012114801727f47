use crate::models::{IssueKind, IssueMap, Severity};
use crate::reference::precedents::{self, Citation, FALLBACK};

use super::types::PrecedentRef;

/// Maximum citations per report.
pub const MAX_PRECEDENTS: usize = 6;

/// Collect citations for every flagged issue, canonical issue order,
/// capped at `MAX_PRECEDENTS`. Falls back to a single foundational cite.
pub fn find_precedents(issues: &IssueMap) -> Vec<PrecedentRef> {
    let mut found: Vec<PrecedentRef> = issues
        .present()
        .flat_map(precedents::for_issue)
        .map(|p| to_ref(&p.citation, Severity::Medium, Some(p.issue)))
        .take(MAX_PRECEDENTS)
        .collect();

    if found.is_empty() {
        found.push(to_ref(&FALLBACK, Severity::Low, None));
    }

    found
}

fn to_ref(citation: &Citation, risk: Severity, issue: Option<IssueKind>) -> PrecedentRef {
    PrecedentRef {
        case: citation.case,
        url: citation.url,
        relevance: citation.holding,
        risk,
        issue,
    }
}
