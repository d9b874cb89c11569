//! Photo collection data.

use serde::Serialize;

/// A published photo collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoCollection {
    pub title: &'static str,
    pub description: &'static str,
    pub count: &'static str,
    pub date: &'static str,
    pub icon: &'static str,
}

/// The association's photo collections.
#[must_use]
pub fn all() -> Vec<PhotoCollection> {
    vec![
        PhotoCollection {
            title: "Tournament 2024",
            description: "Inter-school championship matches, finals, and trophy ceremonies.",
            count: "150+",
            date: "December 2024",
            icon: "fa-trophy",
        },
        PhotoCollection {
            title: "Training Sessions",
            description: "Behind-the-scenes training sessions and skill development.",
            count: "80+",
            date: "November 2024",
            icon: "fa-running",
        },
        PhotoCollection {
            title: "Award Ceremonies",
            description: "Prize giving ceremonies and recognition events.",
            count: "60+",
            date: "December 2024",
            icon: "fa-medal",
        },
        PhotoCollection {
            title: "Team Events",
            description: "Social events, team building, and community outreach.",
            count: "120+",
            date: "October 2024",
            icon: "fa-users",
        },
        PhotoCollection {
            title: "School Visits",
            description: "USRA officials visiting member schools and coaching clinics.",
            count: "90+",
            date: "September 2024",
            icon: "fa-school",
        },
    ]
}
