//! Roster categorization.
//!
//! Derives the grouped view of a school's players shown on the profile:
//! two sex buckets, each split into U15/U17/U20 age bands.

use serde::Serialize;
use usra_db::entities::player;

/// Age bands within one sex bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgeBands {
    /// Players under 15.
    pub u15: Vec<player::Model>,
    /// Players aged 15-16.
    pub u17: Vec<player::Model>,
    /// Players aged 17-19.
    pub u20: Vec<player::Model>,
}

impl AgeBands {
    /// Total players across the bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.u15.len() + self.u17.len() + self.u20.len()
    }

    /// Whether every band is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Categorized roster of one school.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    /// Players whose sex is exactly "Male".
    pub boys: AgeBands,
    /// Everyone else.
    pub girls: AgeBands,
}

/// Group players by sex and age band.
///
/// The sex partition is an exact match against the `"Male"` sentinel;
/// any other value, including missing or differently-spelled ones,
/// lands in the girls bucket. Age bands are checked in precedence
/// order: [17, 20) is U20, [15, 17) is U17, under 15 is U15. Players
/// aged 20 or older fall outside every tracked band and are dropped
/// from the categorized view.
#[must_use]
pub fn categorize(players: &[player::Model]) -> Roster {
    let mut roster = Roster::default();

    for player in players {
        let bucket = if player.sex == "Male" {
            &mut roster.boys
        } else {
            &mut roster.girls
        };

        if (17..20).contains(&player.age) {
            bucket.u20.push(player.clone());
        } else if (15..17).contains(&player.age) {
            bucket.u17.push(player.clone());
        } else if player.age < 15 {
            bucket.u15.push(player.clone());
        }
        // age >= 20: not placed in any band
    }

    roster
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn player(name: &str, age: i32, sex: &str) -> player::Model {
        player::Model {
            id: name.to_lowercase(),
            school_id: "school1".to_string(),
            name: name.to_string(),
            date_of_birth: NaiveDate::default(),
            age,
            sex: sex.to_string(),
            class_level: "S3".to_string(),
            learner_id: format!("LIN-{name}"),
            guardian_contact: None,
            photo_key: None,
            photo_url: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_nineteen_year_old_boy_only_in_boys_u20() {
        let roster = categorize(&[player("Okello", 19, "Male")]);

        assert_eq!(roster.boys.u20.len(), 1);
        assert!(roster.boys.u15.is_empty());
        assert!(roster.boys.u17.is_empty());
        assert!(roster.girls.is_empty());
    }

    #[test]
    fn test_sixteen_year_old_girl_only_in_girls_u17() {
        let roster = categorize(&[player("Faridah", 16, "Female")]);

        assert_eq!(roster.girls.u17.len(), 1);
        assert!(roster.girls.u15.is_empty());
        assert!(roster.girls.u20.is_empty());
        assert!(roster.boys.is_empty());
    }

    #[test]
    fn test_twenty_year_old_appears_in_no_band() {
        // Current behavior: ages 20+ fall outside every tracked band.
        let roster = categorize(&[player("Moses", 20, "Male")]);

        assert!(roster.boys.is_empty());
        assert!(roster.girls.is_empty());
    }

    #[test]
    fn test_fourteen_year_old_in_u15() {
        let roster = categorize(&[player("Junior", 14, "Male")]);

        assert_eq!(roster.boys.u15.len(), 1);
    }

    #[test]
    fn test_band_boundaries() {
        let roster = categorize(&[
            player("A", 15, "Male"),
            player("B", 17, "Male"),
            player("C", 19, "Male"),
        ]);

        assert_eq!(roster.boys.u17.len(), 1);
        assert_eq!(roster.boys.u20.len(), 2);
    }

    #[test]
    fn test_unrecognized_sex_falls_into_girls_bucket() {
        // Exact-match partition: anything that is not "Male" lands in
        // the second bucket, including casing variants.
        let roster = categorize(&[player("X", 16, "male"), player("Y", 16, "")]);

        assert_eq!(roster.girls.u17.len(), 2);
        assert!(roster.boys.is_empty());
    }
}
