//! Initial activity catalog: the built-in roster or a JSON seed file.

use crate::error::{ActivityError, ActivityErrorExt};
use crate::model::{Activity, Catalog};
use std::fs;
use std::path::Path;
use tracing::info;

/// Built-in Mergington High School activities.
pub fn default_catalog() -> Catalog {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball",
            Activity::new(
                "Join the school basketball team and compete in local leagues",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Swimming",
            Activity::new(
                "Improve swimming technique and train for competitions",
                "Mondays and Wednesdays, 4:00 PM - 5:00 PM",
                20,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and produce plays and performances",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["mia@mergington.edu", "ethan@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_owned(), activity))
    .collect()
}

/// Reads and validates a JSON catalog shaped like the `GET /activities` response.
///
/// # Errors
/// * [`ActivityError::Seed`] if the file cannot be read.
/// * [`ActivityError::SeedFormat`] if it is not a valid catalog document.
/// * [`ActivityError::InvalidSeed`] if it breaks a catalog invariant (see [`validate`]).
pub fn load(path: &Path) -> Result<Catalog, ActivityError> {
    let raw = fs::read_to_string(path).context(path.display().to_string())?;
    let catalog: Catalog = serde_json::from_str(&raw).context(path.display().to_string())?;
    validate(&catalog)?;

    info!(path = %path.display(), activities = catalog.len(), "Loaded activity seed");
    Ok(catalog)
}

/// Checks names are non-blank, capacities positive and rosters free of duplicates.
///
/// # Errors
/// Returns [`ActivityError::InvalidSeed`] naming the offending activity.
pub fn validate(catalog: &Catalog) -> Result<(), ActivityError> {
    for (name, activity) in catalog {
        if name.trim().is_empty() {
            return Err(invalid("activity names cannot be blank".to_owned()));
        }
        if activity.max_participants == 0 {
            return Err(invalid(format!("'{name}' must allow at least one participant")));
        }
        if let Some(email) = first_duplicate(&activity.participants) {
            return Err(invalid(format!("'{name}' lists {email} more than once")));
        }
    }
    Ok(())
}

fn first_duplicate(participants: &[String]) -> Option<&str> {
    participants
        .iter()
        .enumerate()
        .find(|&(i, email)| participants[..i].contains(email))
        .map(|(_, email)| email.as_str())
}

fn invalid(message: String) -> ActivityError {
    ActivityError::InvalidSeed { message: message.into(), context: None }
}
