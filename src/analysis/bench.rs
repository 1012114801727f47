use crate::models::IssueMap;
use crate::reference::justices::{self, Justice, PANEL, ROSTER};

use super::types::JusticeQuestion;

/// Question for one persona: the first flagged issue (canonical order) the
/// persona has a template for, else the persona's default.
pub fn generate_single_question(justice: &Justice, issues: &IssueMap) -> JusticeQuestion {
    let question = issues
        .present()
        .find_map(|kind| justice.template_for(kind))
        .unwrap_or(justice.default_question);

    JusticeQuestion {
        justice: justice.id,
        name: justice.name,
        focus: justice.focus,
        question,
        pressure: justice.pressure,
    }
}

/// Questions from the fixed four-member panel used in every report.
pub fn generate_justice_questions(issues: &IssueMap) -> Vec<JusticeQuestion> {
    PANEL
        .iter()
        .filter_map(|id| justices::find(id))
        .map(|j| generate_single_question(j, issues))
        .collect()
}

/// Questions from all nine personas, seniority order.
pub fn simulate_full_bench(issues: &IssueMap) -> Vec<JusticeQuestion> {
    ROSTER
        .iter()
        .map(|j| generate_single_question(j, issues))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueKind;

    fn justice(id: &str) -> &'static Justice {
        justices::find(id).unwrap()
    }

    #[test]
    fn panel_order_is_fixed() {
        let ids: Vec<_> = generate_justice_questions(&IssueMap::new())
            .iter()
            .map(|q| q.justice)
            .collect();
        assert_eq!(ids, PANEL.to_vec());
    }

    #[test]
    fn no_issues_uses_default_question() {
        let thomas = justice("thomas");
        let q = generate_single_question(thomas, &IssueMap::new());
        assert_eq!(q.question, thomas.default_question);
        assert_eq!(q.pressure, thomas.pressure);
        assert_eq!(q.name, "Justice Thomas");
    }

    #[test]
    fn first_templated_issue_in_canonical_order_wins() {
        // Jackson has templates for voting rights and equal protection.
        let issues = IssueMap::new()
            .with(IssueKind::EqualProtection)
            .with(IssueKind::VotingRights);
        let jackson = justice("jackson");
        let q = generate_single_question(jackson, &issues);
        assert_eq!(
            Some(q.question),
            jackson.template_for(IssueKind::VotingRights)
        );
    }

    #[test]
    fn untemplated_issues_are_skipped() {
        let issues = IssueMap::new()
            .with(IssueKind::Preemption)
            .with(IssueKind::Standing);
        let kagan = justice("kagan");
        let q = generate_single_question(kagan, &issues);
        assert_eq!(Some(q.question), kagan.template_for(IssueKind::Standing));
    }

    #[test]
    fn persona_without_templates_always_defaults() {
        let roberts = justice("roberts");
        let all = IssueKind::ALL
            .into_iter()
            .fold(IssueMap::new(), |m, k| m.with(k));
        let q = generate_single_question(roberts, &all);
        assert_eq!(q.question, roberts.default_question);
    }

    #[test]
    fn full_bench_covers_roster() {
        let bench = simulate_full_bench(&IssueMap::new().with(IssueKind::FirstAmendment));
        assert_eq!(bench.len(), 9);
        assert_eq!(bench[0].justice, "roberts");
        assert_eq!(bench[8].justice, "jackson");
        let barrett = bench.iter().find(|q| q.justice == "barrett").unwrap();
        assert!(barrett.question.contains("level of scrutiny"));
    }
}
