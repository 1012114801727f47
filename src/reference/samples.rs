use crate::models::{CaseInput, Posture, PostureRequest};

/// Canned docket excerpt for trying the service without real materials.
#[derive(Debug)]
pub struct SampleCase {
    pub id: &'static str,
    pub title: &'static str,
    pub docket: &'static str,
    pub posture: Posture,
    /// Short issue label shown next to the case name.
    pub issue: &'static str,
    pub text: &'static str,
}

impl SampleCase {
    /// Analysis input with the sample's declared posture and docket.
    pub fn to_input(&self) -> CaseInput {
        CaseInput::new(self.text)
            .with_title(self.title)
            .with_posture(PostureRequest::Declared(self.posture))
            .with_docket(self.docket)
    }
}

pub static SAMPLES: &[SampleCase] = &[
    SampleCase {
        id: "louisiana",
        title: "Louisiana v. Callais",
        docket: "24-109",
        posture: Posture::Merits,
        issue: "VRA Section 2 · Racial Gerrymandering",
        text: "PETITION FOR WRIT OF CERTIORARI. No. 24-109. QUESTIONS PRESENTED: \
1. Whether drawing a second majority-minority congressional district to remedy a likely \
Voting Rights Act violation offends the Fourteenth or Fifteenth Amendment. \
2. Whether the district court erred in finding that race predominated in the enactment \
of the challenged redistricting plan.",
    },
    SampleCase {
        id: "trump-tariffs",
        title: "Trump v. V.O.S. Selections",
        docket: "24-892",
        posture: Posture::Merits,
        issue: "IEEPA · Tariffs · Nondelegation",
        text: "PETITION FOR WRIT OF CERTIORARI. No. 24-892. QUESTIONS PRESENTED: \
1. Whether the International Emergency Economic Powers Act authorizes the President to \
impose tariffs. 2. Whether reading the statute to delegate taxing authority violates the \
nondelegation doctrine.",
    },
    SampleCase {
        id: "ftc-removal",
        title: "Trump v. Slaughter",
        docket: "24-631",
        posture: Posture::Merits,
        issue: "Removal Power · Separation of Powers",
        text: "PETITION FOR WRIT OF CERTIORARI. No. 24-631. QUESTIONS PRESENTED: \
1. Whether statutory removal protections for FTC commissioners violate the separation of \
powers. 2. Whether Humphrey's Executor v. United States should be overruled.",
    },
    SampleCase {
        id: "williams-reed",
        title: "Williams v. Reed",
        docket: "23-191",
        posture: Posture::Merits,
        issue: "Section 1983 · Due Process · Exhaustion",
        text: "PETITION FOR WRIT OF CERTIORARI. No. 23-191. QUESTIONS PRESENTED: \
1. Whether a State may require exhaustion of state administrative remedies before a \
plaintiff brings due process claims under 42 U.S.C. § 1983 in state court.",
    },
];

pub fn find(id: &str) -> Option<&'static SampleCase> {
    SAMPLES.iter().find(|s| s.id == id)
}
