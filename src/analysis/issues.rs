use crate::models::{IssueKind, IssueMap};

/// Trigger phrases per issue, matched as lower-case substrings.
pub fn keywords(kind: IssueKind) -> &'static [&'static str] {
    match kind {
        IssueKind::VotingRights => &["voting rights", "vra", "section 2", "vote dilution"],
        IssueKind::EqualProtection => &[
            "equal protection",
            "14th amendment",
            "fourteenth amendment",
            "discrimination",
        ],
        IssueKind::FirstAmendment => &[
            "first amendment",
            "free speech",
            "free exercise",
            "establishment clause",
        ],
        IssueKind::SeparationOfPowers => &[
            "separation of powers",
            "executive power",
            "removal",
            "nondelegation",
        ],
        IssueKind::Standing => &[
            "standing",
            "injury in fact",
            "case or controversy",
            "mootness",
        ],
        IssueKind::DueProcess => &["due process", "procedural", "substantive due process"],
        IssueKind::CommerceClause => &[
            "commerce clause",
            "interstate commerce",
            "dormant commerce",
        ],
        IssueKind::Preemption => &["preemption", "supremacy clause", "federal preemption"],
    }
}

/// Flag every issue whose keywords occur in the text. Categories are
/// independent; any number may be set.
pub fn extract_issues(text: &str) -> IssueMap {
    let lower = text.to_lowercase();
    let mut issues = IssueMap::new();

    for kind in IssueKind::ALL {
        issues.set(kind, keywords(kind).iter().any(|kw| lower.contains(kw)));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voting_rights_act_only_flags_voting_rights() {
        let issues = extract_issues("Plaintiffs sued under the Voting Rights Act.");
        assert!(issues.get(IssueKind::VotingRights));
        assert_eq!(issues.present().count(), 1);
    }

    #[test]
    fn empty_text_flags_nothing() {
        assert!(!extract_issues("").any());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let issues = extract_issues("THE SUPREMACY CLAUSE");
        assert!(issues.get(IssueKind::Preemption));
    }

    #[test]
    fn multiple_issues_can_coexist() {
        let issues = extract_issues(
            "Equal protection and standing questions, plus the dormant commerce doctrine",
        );
        let found: Vec<_> = issues.present().collect();
        assert_eq!(
            found,
            vec![
                IssueKind::EqualProtection,
                IssueKind::Standing,
                IssueKind::CommerceClause
            ]
        );
    }

    #[test]
    fn substring_match_is_literal() {
        // "removal" inside another word still counts.
        assert!(extract_issues("snow removals").get(IssueKind::SeparationOfPowers));
        assert!(extract_issues("Procedurally barred").get(IssueKind::DueProcess));
    }

    #[test]
    fn every_issue_has_keywords() {
        for kind in IssueKind::ALL {
            let kws = keywords(kind);
            assert!((3..=4).contains(&kws.len()), "{kind}");
            assert!(kws.iter().all(|k| k.to_lowercase() == *k));
        }
    }
}
