//! Annual workplan data.

use serde::Serialize;

/// One workplan activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkplanEntry {
    pub month: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// The association's activity calendar for the year.
#[must_use]
pub fn all() -> Vec<WorkplanEntry> {
    vec![
        WorkplanEntry {
            month: "Jan",
            date: "15",
            title: "EXCOM Annual Planning Meeting",
            body: "Responsible Body: EXCOM",
        },
        WorkplanEntry {
            month: "Feb-Apr",
            date: "23-06",
            title: "Ball Game One Qualifiers",
            body: "Covers multiple leagues including Central, Eastern, Western, and Northern regions for both boys and girls.",
        },
        WorkplanEntry {
            month: "Apr",
            date: "6-13",
            title: "Regional Evaluation Meetings",
            body: "Evaluation of Ball Game One Qualifiers. Responsible: Regional Representatives.",
        },
        WorkplanEntry {
            month: "Apr",
            date: "19",
            title: "Ball Games One & Two Planning",
            body: "Evaluation and planning meeting. Responsible Body: EXCOM",
        },
        WorkplanEntry {
            month: "May",
            date: "4-14",
            title: "USSSA National Ball Game One",
            body: "National championship for qualified schools.",
        },
        WorkplanEntry {
            month: "Jun",
            date: "8-29",
            title: "Ball Game Two Qualifiers",
            body: "7s tournaments including Kabaka Coronation, Kyabazinga, Won Nyaci, and Rwot Adwong cups.",
        },
        WorkplanEntry {
            month: "Jul",
            date: "5",
            title: "Ball Game Two & AGM Planning",
            body: "Evaluation of qualifiers and AGM planning. Responsible Body: EXCOM.",
        },
        WorkplanEntry {
            month: "Jul",
            date: "9-18",
            title: "USSSA National Ball Game Two",
            body: "National 7s championship.",
        },
        WorkplanEntry {
            month: "Aug",
            date: "19-27",
            title: "FEASSA Games",
            body: "Federation of East African Secondary Schools Sports Association games.",
        },
        WorkplanEntry {
            month: "Sep",
            date: "6",
            title: "Annual General Meeting",
            body: "Responsible Body: EXCOM",
        },
        WorkplanEntry {
            month: "Oct",
            date: "9",
            title: "Independence Cup",
            body: "Tournament celebrating Uganda's independence.",
        },
        WorkplanEntry {
            month: "Dec",
            date: "14-20",
            title: "Abu Dhabi World Schools Festival",
            body: "International exposure for the U20 select team.",
        },
    ]
}
