//! Static guided-tour step tables keyed by tutorial id.

/// Preferred tooltip placement relative to the highlighted element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Placement {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Top => "tutorial-tip--top",
            Self::Bottom => "tutorial-tip--bottom",
            Self::Left => "tutorial-tip--left",
            Self::Right => "tutorial-tip--right",
            Self::Center => "tutorial-tip--center",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialStep {
    /// CSS selector of the element to highlight.
    pub target: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub placement: Placement,
    /// Short hint telling the user what to try, if any.
    pub action: Option<&'static str>,
}

const DASHBOARD: &[TutorialStep] = &[
    TutorialStep {
        target: ".dashboard-summary",
        title: "Your portfolio at a glance",
        description: "Total value, amount invested and overall gain update every time a round-up is invested.",
        placement: Placement::Bottom,
        action: None,
    },
    TutorialStep {
        target: ".dashboard-holdings",
        title: "Holdings",
        description: "Each purchase rounds up into shares of the brand you shopped with.",
        placement: Placement::Top,
        action: Some("Hover a row to see share counts"),
    },
    TutorialStep {
        target: ".dashboard-transactions",
        title: "Recent transactions",
        description: "Pending round-ups are invested in the next batch.",
        placement: Placement::Top,
        action: None,
    },
    TutorialStep {
        target: ".dashboard-goals",
        title: "Goals",
        description: "Track progress toward the things you are saving for.",
        placement: Placement::Left,
        action: Some("Open a goal to adjust its target"),
    },
];

const FAMILY: &[TutorialStep] = &[
    TutorialStep {
        target: ".dashboard-summary",
        title: "Family portfolio",
        description: "Everyone's round-ups flow into one shared portfolio.",
        placement: Placement::Bottom,
        action: None,
    },
    TutorialStep {
        target: ".dashboard-members",
        title: "Members",
        description: "See how much each member has contributed.",
        placement: Placement::Right,
        action: Some("Invite a member from settings"),
    },
    TutorialStep {
        target: ".dashboard-goals",
        title: "Shared goals",
        description: "Save together for college, trips and more.",
        placement: Placement::Left,
        action: None,
    },
];

const BUSINESS: &[TutorialStep] = &[
    TutorialStep {
        target: ".dashboard-summary",
        title: "Company portfolio",
        description: "Business spending rounds up into a company investment account.",
        placement: Placement::Bottom,
        action: None,
    },
    TutorialStep {
        target: ".dashboard-employees",
        title: "Employees",
        description: "Enrolled employees can see the shares their team earns.",
        placement: Placement::Right,
        action: Some("Enroll an employee"),
    },
    TutorialStep {
        target: ".dashboard-transactions",
        title: "Business transactions",
        description: "Every card purchase shows its round-up and the ticker it bought.",
        placement: Placement::Top,
        action: None,
    },
];

const DEMO: &[TutorialStep] = &[
    TutorialStep {
        target: ".demo-banner",
        title: "You are in demo mode",
        description: "All numbers here are sample data. Nothing is sent to your bank.",
        placement: Placement::Bottom,
        action: None,
    },
    TutorialStep {
        target: ".demo-persona-picker",
        title: "Switch accounts",
        description: "Try the individual, family and business experiences.",
        placement: Placement::Bottom,
        action: Some("Pick a different persona"),
    },
];

/// Steps for `tutorial_id`, or `None` when no such tour exists.
pub fn steps_for(tutorial_id: &str) -> Option<&'static [TutorialStep]> {
    match tutorial_id {
        "dashboard" => Some(DASHBOARD),
        "family" => Some(FAMILY),
        "business" => Some(BUSINESS),
        "demo" => Some(DEMO),
        _ => None,
    }
}
