//! Events calendar data.

use serde::Serialize;

/// Event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Tournament,
    Meeting,
    National,
    International,
    Special,
}

/// Event timeline bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTimeline {
    Upcoming,
    Current,
    Past,
}

/// A calendar event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
    pub timeline: EventTimeline,
    pub badge: &'static str,
    pub responsible: &'static str,
}

/// The association's event calendar.
#[must_use]
pub fn all() -> Vec<Event> {
    vec![
        Event {
            id: 10,
            title: "Annual General Meeting",
            date: "September 6, 2025",
            location: "USRA Headquarters, Kampala",
            description: "Annual general meeting to review the year's achievements and plan for the future.",
            category: EventCategory::Meeting,
            timeline: EventTimeline::Current,
            badge: "Happening Today",
            responsible: "EXCOM",
        },
        Event {
            id: 11,
            title: "Independence Cup",
            date: "October 9, 2025",
            location: "Kampala - Venue TBA",
            description: "Special tournament celebrating Uganda's independence with participation from all regions.",
            category: EventCategory::Special,
            timeline: EventTimeline::Upcoming,
            badge: "Next Event",
            responsible: "All Regional Representatives",
        },
        Event {
            id: 12,
            title: "Abu Dhabi World Schools Festival",
            date: "December 14-20, 2025",
            location: "Abu Dhabi, UAE",
            description: "Elite international schools rugby festival featuring Uganda's U20 select team.",
            category: EventCategory::International,
            timeline: EventTimeline::Upcoming,
            badge: "International",
            responsible: "National Schools U20 Select, URU, EXCOM",
        },
        Event {
            id: 2,
            title: "Ball Game One Qualifiers",
            date: "Feb 23 - Apr 6, 2025",
            location: "All Regions - Multiple Venues",
            description: "Regional qualifying tournaments across Central, Eastern, Western, and Northern regions.",
            category: EventCategory::Tournament,
            timeline: EventTimeline::Past,
            badge: "Completed",
            responsible: "Regional Coordination Committees & RDOs",
        },
        Event {
            id: 5,
            title: "USSSA National Ball Game One",
            date: "May 4-14, 2025",
            location: "Kampala Rugby Club",
            description: "The premier national schools rugby championship featuring qualified teams from across Uganda.",
            category: EventCategory::National,
            timeline: EventTimeline::Past,
            badge: "Completed",
            responsible: "Qualified Schools",
        },
        Event {
            id: 9,
            title: "FEASSA Games",
            date: "August 19-27, 2025",
            location: "Nairobi, Kenya",
            description: "Federation of East African Secondary Schools Sports Association games featuring Uganda's best.",
            category: EventCategory::International,
            timeline: EventTimeline::Past,
            badge: "Completed",
            responsible: "Qualified Schools",
        },
    ]
}
