use crate::models::IssueKind;

/// Hand-authored citation with a one-line holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation {
    pub case: &'static str,
    pub url: &'static str,
    pub holding: &'static str,
}

/// A citation filed under the issue it speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedent {
    pub citation: Citation,
    pub issue: IssueKind,
}

/// Cited when no issue matched.
pub const FALLBACK: Citation = Citation {
    case: "Marbury v. Madison, 5 U.S. 137 (1803)",
    url: "https://supreme.justia.com/cases/federal/us/5/137/",
    holding: "Foundational judicial review authority",
};

/// Grouped by issue, canonical issue order, then table order within a group.
pub static PRECEDENTS: &[Precedent] = &[
    Precedent {
        citation: Citation {
            case: "Thornburg v. Gingles, 478 U.S. 30 (1986)",
            url: "https://supreme.justia.com/cases/federal/us/478/30/",
            holding: "Established Section 2 VRA preconditions for vote dilution claims",
        },
        issue: IssueKind::VotingRights,
    },
    Precedent {
        citation: Citation {
            case: "Shaw v. Reno, 509 U.S. 630 (1993)",
            url: "https://supreme.justia.com/cases/federal/us/509/630/",
            holding: "Racial gerrymandering violates Equal Protection",
        },
        issue: IssueKind::VotingRights,
    },
    Precedent {
        citation: Citation {
            case: "Allen v. Milligan, 599 U.S. 1 (2023)",
            url: "https://supreme.justia.com/cases/federal/us/599/1/",
            holding: "Reaffirmed Gingles framework for Section 2 claims",
        },
        issue: IssueKind::VotingRights,
    },
    Precedent {
        citation: Citation {
            case: "Miller v. Johnson, 515 U.S. 900 (1995)",
            url: "https://supreme.justia.com/cases/federal/us/515/900/",
            holding: "Race cannot predominate in redistricting without compelling justification",
        },
        issue: IssueKind::EqualProtection,
    },
    Precedent {
        citation: Citation {
            case: "Cooper v. Harris, 581 U.S. 285 (2017)",
            url: "https://supreme.justia.com/cases/federal/us/581/285/",
            holding: "Good-faith VRA compliance cannot save unnecessary racial sorting",
        },
        issue: IssueKind::EqualProtection,
    },
    Precedent {
        citation: Citation {
            case: "Reed v. Town of Gilbert, 576 U.S. 155 (2015)",
            url: "https://supreme.justia.com/cases/federal/us/576/155/",
            holding: "Content-based speech restrictions subject to strict scrutiny",
        },
        issue: IssueKind::FirstAmendment,
    },
    Precedent {
        citation: Citation {
            case: "New York Times Co. v. Sullivan, 376 U.S. 254 (1964)",
            url: "https://supreme.justia.com/cases/federal/us/376/254/",
            holding: "Actual malice standard for defamation of public figures",
        },
        issue: IssueKind::FirstAmendment,
    },
    Precedent {
        citation: Citation {
            case: "Humphrey's Executor v. United States, 295 U.S. 602 (1935)",
            url: "https://supreme.justia.com/cases/federal/us/295/602/",
            holding: "Congress may limit presidential removal of certain officers",
        },
        issue: IssueKind::SeparationOfPowers,
    },
    Precedent {
        citation: Citation {
            case: "Seila Law LLC v. CFPB, 591 U.S. ___ (2020)",
            url: "https://supreme.justia.com/cases/federal/us/591/19-7/",
            holding: "Single-director removal restrictions unconstitutional",
        },
        issue: IssueKind::SeparationOfPowers,
    },
    Precedent {
        citation: Citation {
            case: "Lujan v. Defenders of Wildlife, 504 U.S. 555 (1992)",
            url: "https://supreme.justia.com/cases/federal/us/504/555/",
            holding: "Article III standing requires injury, causation, redressability",
        },
        issue: IssueKind::Standing,
    },
    Precedent {
        citation: Citation {
            case: "TransUnion LLC v. Ramirez, 594 U.S. ___ (2021)",
            url: "https://supreme.justia.com/cases/federal/us/594/20-297/",
            holding: "Statutory violations alone insufficient for Article III standing",
        },
        issue: IssueKind::Standing,
    },
];

/// Precedents recorded for one issue, in table order.
pub fn for_issue(kind: IssueKind) -> impl Iterator<Item = &'static Precedent> {
    PRECEDENTS.iter().filter(move |p| p.issue == kind)
}
