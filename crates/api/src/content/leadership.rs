//! Leadership roster data.

use serde::Serialize;

/// A committee member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: &'static str,
    pub title: &'static str,
    pub school: &'static str,
    pub region: &'static str,
}

/// A committee and its members.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    pub name: &'static str,
    pub members: Vec<Member>,
}

/// The association's committees.
#[must_use]
pub fn all() -> Vec<Committee> {
    vec![
        Committee {
            name: "Executive Committee",
            members: vec![
                Member {
                    name: "Okello Dickson",
                    title: "Chairman",
                    school: "Makerere College School",
                    region: "Central Region",
                },
                Member {
                    name: "Molo Robson",
                    title: "Vice Chairman",
                    school: "Inomo S.S",
                    region: "Northern Region",
                },
                Member {
                    name: "Seguya Wilfred Bakaluba",
                    title: "General Secretary",
                    school: "Hana International",
                    region: "Central Region",
                },
                Member {
                    name: "Sewaya Ismail",
                    title: "Treasurer",
                    school: "Kira College Butiki",
                    region: "Eastern Region",
                },
                Member {
                    name: "Faridah Kayegi",
                    title: "Woman Representative",
                    school: "Oxford High School Mbale",
                    region: "Eastern Region",
                },
                Member {
                    name: "Wati Richard",
                    title: "Central Schools Representative",
                    school: "London College of St. Lawrence-Maya",
                    region: "Central Region",
                },
                Member {
                    name: "Kigenyi Patrick Paul",
                    title: "Western Schools Representative",
                    school: "Mbarara High School",
                    region: "Western Region",
                },
                Member {
                    name: "Ochakachon Robert",
                    title: "Northern Schools Representative",
                    school: "Sir Samuel Baker School-Gulu",
                    region: "Northern Region",
                },
                Member {
                    name: "Barasa Moses",
                    title: "Eastern Schools Representative",
                    school: "Busoga College Mwiri",
                    region: "Eastern Region",
                },
            ],
        },
        Committee {
            name: "Finance Committee",
            members: vec![
                Member {
                    name: "Sewaya Ismail",
                    title: "Chairperson",
                    school: "Kira College Butiki",
                    region: "Eastern Region",
                },
                Member {
                    name: "Seguya Wilfred Bakaluba",
                    title: "Secretary",
                    school: "Hana International",
                    region: "Central Region",
                },
                Member {
                    name: "Okello Dickson",
                    title: "Member",
                    school: "Makerere College School",
                    region: "Central Region",
                },
            ],
        },
        Committee {
            name: "Technical Committee",
            members: vec![
                Member {
                    name: "Matsiko Vian",
                    title: "Chairperson",
                    school: "TBA",
                    region: "TBA",
                },
                Member {
                    name: "Molo Robson",
                    title: "Secretary",
                    school: "Inomo S.S",
                    region: "Northern Region",
                },
                Member {
                    name: "Barasa Moses",
                    title: "Member",
                    school: "Busoga College Mwiri",
                    region: "Eastern Region",
                },
            ],
        },
        Committee {
            name: "Girls' Rugby Committee",
            members: vec![
                Member {
                    name: "Ms. Kayegi Faridah",
                    title: "Chairperson",
                    school: "Oxford High School Mbale",
                    region: "Eastern Region",
                },
                Member {
                    name: "Mr. Molo Robson",
                    title: "Secretary",
                    school: "Inomo S.S",
                    region: "Northern Region",
                },
            ],
        },
    ]
}
