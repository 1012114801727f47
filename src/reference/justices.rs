use crate::models::{BenchRole, IssueKind};

/// Static persona profile with its question templates.
#[derive(Debug)]
pub struct Justice {
    pub id: &'static str,
    pub name: &'static str,
    pub role: BenchRole,
    pub focus: &'static str,
    pub style: &'static str,
    /// Issue-specific questions, checked in canonical issue order.
    pub templates: &'static [(IssueKind, &'static str)],
    pub default_question: &'static str,
    pub pressure: &'static str,
}

impl Justice {
    /// Template for `kind`, if this persona has one.
    pub fn template_for(&self, kind: IssueKind) -> Option<&'static str> {
        self.templates
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, q)| *q)
    }
}

/// Ids of the four personas questioned in every analysis.
pub const PANEL: [&str; 4] = ["thomas", "kagan", "barrett", "jackson"];

/// Full bench, seniority order.
pub static ROSTER: &[Justice] = &[
    Justice {
        id: "roberts",
        name: "Chief Justice Roberts",
        role: BenchRole::Chief,
        focus: "Institutionalism & Narrow Rulings",
        style: "Seeks incremental, consensus-building decisions",
        templates: &[],
        default_question: "Is there a narrow way to decide this case without reaching the broader constitutional question you're pressing?",
        pressure: "Seeks narrow resolution; tests for minimalist off-ramps",
    },
    Justice {
        id: "thomas",
        name: "Justice Thomas",
        role: BenchRole::Associate,
        focus: "Originalism & Constitutional Text",
        style: "Questions structural precedents; emphasizes original meaning",
        templates: &[
            (
                IssueKind::VotingRights,
                "Where in the constitutional text does Congress derive authority to mandate race-conscious districting? Isn't Section 2 of the VRA itself constitutionally suspect under the original public meaning of the Fifteenth Amendment?",
            ),
            (
                IssueKind::SeparationOfPowers,
                "What is the original understanding of \"executive Power\" in Article II? Doesn't the removal restriction here conflict with the Constitution's vesting of that power in the President?",
            ),
        ],
        default_question: "What is the original public meaning of the constitutional provision at issue, and how does that constrain our analysis?",
        pressure: "Challenges modern interpretations against original constitutional framework",
    },
    Justice {
        id: "alito",
        name: "Justice Alito",
        role: BenchRole::Associate,
        focus: "Textual Analysis & Practical Consequences",
        style: "Probes real-world impacts and statutory interpretation",
        templates: &[],
        default_question: "What are the real-world consequences of your proposed rule? Who wins and who loses?",
        pressure: "Probes practical consequences and implementation difficulties",
    },
    Justice {
        id: "sotomayor",
        name: "Justice Sotomayor",
        role: BenchRole::Associate,
        focus: "Civil Rights & Practical Impact",
        style: "Focuses on effects on marginalized communities",
        templates: &[],
        default_question: "How does your position affect ordinary people? Have you considered the on-the-ground impact?",
        pressure: "Emphasizes human impact and fairness concerns",
    },
    Justice {
        id: "kagan",
        name: "Justice Kagan",
        role: BenchRole::Associate,
        focus: "Pragmatic Interpretation & Workability",
        style: "Tests practical implementation of legal rules",
        templates: &[
            (
                IssueKind::VotingRights,
                "If we rule for you, what exactly should states do when facing a Section 2 violation? Must they wait for contempt before drawing remedial maps?",
            ),
            (
                IssueKind::Standing,
                "Walk me through how your proposed standing rule would work in practice. What cases does it let in, and what does it keep out?",
            ),
        ],
        default_question: "Give me a workable test. How would lower courts actually apply this standard?",
        pressure: "Forces articulation of workable, real-world legal standard",
    },
    Justice {
        id: "gorsuch",
        name: "Justice Gorsuch",
        role: BenchRole::Associate,
        focus: "Textualism & Separation of Powers",
        style: "Strict adherence to statutory text and constitutional structure",
        templates: &[],
        default_question: "Point me to the statutory text. Where are the words that support your reading?",
        pressure: "Insists on textual grounding for every proposition",
    },
    Justice {
        id: "kavanaugh",
        name: "Justice Kavanaugh",
        role: BenchRole::Associate,
        focus: "Precedent & Moderate Application",
        style: "Weighs stare decisis carefully; seeks middle-ground",
        templates: &[],
        default_question: "What about stare decisis? What reliance interests would we disrupt by ruling your way?",
        pressure: "Weighs reliance interests and precedential stability",
    },
    Justice {
        id: "barrett",
        name: "Justice Barrett",
        role: BenchRole::Associate,
        focus: "Originalism & Doctrinal Clarity",
        style: "Precise doctrinal questions; historical analysis",
        templates: &[
            (
                IssueKind::VotingRights,
                "Does VRA compliance automatically constitute a compelling interest, or must we engage in additional balancing? What's the doctrinal framework?",
            ),
            (
                IssueKind::FirstAmendment,
                "What level of scrutiny applies here, and what's the precise test? I want clean doctrine.",
            ),
        ],
        default_question: "Help me understand the doctrinal rule you want us to announce and how it fits existing precedent.",
        pressure: "Demands clean legal test that harmonizes with existing doctrine",
    },
    Justice {
        id: "jackson",
        name: "Justice Jackson",
        role: BenchRole::Associate,
        focus: "Historical Context & Equity",
        style: "Emphasizes historical background and fairness",
        templates: &[
            (
                IssueKind::VotingRights,
                "Given the specific history of voter disenfranchisement in this jurisdiction, isn't there something dissonant about using Equal Protection to prevent majority-Black districts?",
            ),
            (
                IssueKind::EqualProtection,
                "What historical context should inform our interpretation? How does the purpose behind this provision guide us?",
            ),
        ],
        default_question: "What historical background are we overlooking that should inform our reading here?",
        pressure: "Invokes purposive/historical analysis to destabilize formalist arguments",
    },
];

/// Look up a persona by id (`"thomas"`, `"kagan"`, ...).
pub fn find(id: &str) -> Option<&'static Justice> {
    ROSTER.iter().find(|j| j.id == id)
}
