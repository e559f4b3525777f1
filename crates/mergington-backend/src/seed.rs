//! Seed data the roster is built from at startup.

use std::path::Path;

use mergington::data::{Activity, ActivityListing};
use mergington::errors::SeedError;
use mergington::serde_json;

/// The built-in Mergington High School activities.
pub fn mergington() -> ActivityListing {
    let activities = [
        (
            "Basketball Team",
            Activity::new(
                "Join the varsity and JV basketball teams for competitive play",
                "Mondays, Wednesdays, Fridays, 4:00 PM - 5:30 PM",
                15,
                ["alex@mergington.edu"],
            ),
        ),
        (
            "Volleyball Club",
            Activity::new(
                "Learn volleyball skills and compete in tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                18,
                ["jordan@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Perform in school plays and theatrical productions",
                "Wednesdays, 3:30 PM - 5:00 PM",
                25,
                ["marcus@mergington.edu", "isabella@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and sculpture techniques",
                "Mondays and Thursdays, 3:30 PM - 4:45 PM",
                16,
                ["grace@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop argumentation skills and compete in debates",
                "Tuesdays, 3:30 PM - 5:00 PM",
                20,
                ["ryan@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Conduct experiments and explore advanced scientific concepts",
                "Fridays, 3:30 PM - 4:45 PM",
                15,
                ["ava@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                ["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                ["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ];

    ActivityListing(
        activities
            .into_iter()
            .map(|(name, activity)| (name.to_string(), activity))
            .collect(),
    )
}

/// Reads a seed file in the same JSON shape `GET /activities` returns.
pub fn from_file(path: &Path) -> Result<ActivityListing, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_seed_is_valid() {
        let seed = mergington();
        assert_eq!(seed.len(), 9);
        assert_eq!(
            seed.get("Basketball Team").unwrap().participants,
            vec!["alex@mergington.edu"]
        );
        assert!(crate::services::RosterInMemory::from_seed(seed).is_ok());
    }

    #[test]
    fn seed_file_round_trips_listing_shape() {
        let path =
            std::env::temp_dir().join(format!("mergington-seed-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&mergington()).unwrap()).unwrap();

        let loaded = from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, mergington());
    }

    #[test]
    fn missing_seed_file_is_a_read_error() {
        let err = from_file(Path::new("/nonexistent/mergington/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
