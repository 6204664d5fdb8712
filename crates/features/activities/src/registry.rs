//! In-memory activity registry.
//!
//! The set of activities is fixed at construction; only rosters change. Every
//! membership test and the mutation that follows it run under one write lock, so
//! an email can never appear twice on a roster even with concurrent handlers.

use crate::error::ActivityError;
use crate::model::Catalog;
use parking_lot::RwLock;
use std::fmt;
use tracing::{debug, info};

/// Outcome of a successful roster change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedUp { activity, email } => write!(f, "Signed up {email} for {activity}"),
            Self::Unregistered { activity, email } => {
                write!(f, "Unregistered {email} from {activity}")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<Catalog>,
}

impl ActivityRegistry {
    pub fn new(catalog: Catalog) -> Self {
        Self { activities: RwLock::new(catalog) }
    }

    /// Snapshot of every activity, in seed order.
    pub fn list(&self) -> Catalog {
        self.activities.read().clone()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    /// Appends `email` to the roster of `activity`.
    ///
    /// # Errors
    /// * [`ActivityError::NotFound`] when the activity does not exist.
    /// * [`ActivityError::AlreadySignedUp`] when the email is already on the roster.
    pub fn signup(&self, activity: &str, email: &str) -> Result<Confirmation, ActivityError> {
        let mut activities = self.activities.write();
        let record = activities.get_mut(activity).ok_or_else(|| not_found(activity))?;

        if record.is_registered(email) {
            debug!(activity, email, "Rejected duplicate signup");
            return Err(ActivityError::AlreadySignedUp {
                activity: activity.to_owned(),
                email: email.to_owned(),
                context: None,
            });
        }

        record.participants.push(email.to_owned());
        drop(activities);

        info!(activity, email, "Student signed up");
        Ok(Confirmation::SignedUp { activity: activity.to_owned(), email: email.to_owned() })
    }

    /// Removes `email` from the roster of `activity`, keeping the order of the rest.
    ///
    /// # Errors
    /// * [`ActivityError::NotFound`] when the activity does not exist.
    /// * [`ActivityError::NotRegistered`] when the email is not on the roster.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ActivityError> {
        let mut activities = self.activities.write();
        let record = activities.get_mut(activity).ok_or_else(|| not_found(activity))?;

        let Some(position) = record.participants.iter().position(|p| p == email) else {
            debug!(activity, email, "Rejected unregister of absent student");
            return Err(ActivityError::NotRegistered {
                activity: activity.to_owned(),
                email: email.to_owned(),
                context: None,
            });
        };

        record.participants.remove(position);
        drop(activities);

        info!(activity, email, "Student unregistered");
        Ok(Confirmation::Unregistered { activity: activity.to_owned(), email: email.to_owned() })
    }
}

fn not_found(activity: &str) -> ActivityError {
    debug!(activity, "Unknown activity");
    ActivityError::NotFound { activity: activity.to_owned(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;

    fn registry() -> ActivityRegistry {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_owned(),
            Activity::new("Strategy", "Fridays", 2)
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        catalog.insert("Gym Class".to_owned(), Activity::new("Sports", "Mondays", 30));
        ActivityRegistry::new(catalog)
    }

    #[test]
    fn signup_ignores_advisory_capacity() {
        let registry = registry();
        registry.signup("Chess Club", "emma@mergington.edu").expect("capacity is advisory");

        assert_eq!(registry.list()["Chess Club"].participants.len(), 3);
    }

    #[test]
    fn unregister_preserves_order_of_remaining_participants() {
        let registry = registry();
        registry.signup("Chess Club", "emma@mergington.edu").expect("signup");
        registry.unregister("Chess Club", "michael@mergington.edu").expect("unregister");

        assert_eq!(
            registry.list()["Chess Club"].participants,
            ["daniel@mergington.edu", "emma@mergington.edu"]
        );
    }

    #[test]
    fn mutations_touch_only_the_named_activity() {
        let registry = registry();
        let before = registry.list();
        registry.signup("Gym Class", "john@mergington.edu").expect("signup");

        let after = registry.list();
        assert_eq!(before["Chess Club"], after["Chess Club"]);
        assert_eq!(after["Gym Class"].participants, ["john@mergington.edu"]);
    }

    #[test]
    fn list_is_a_snapshot() {
        let registry = registry();
        let snapshot = registry.list();
        registry.signup("Gym Class", "olivia@mergington.edu").expect("signup");

        assert!(snapshot["Gym Class"].participants.is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn activity_names_are_case_sensitive() {
        let err = registry().signup("chess club", "emma@mergington.edu").expect_err("unknown");
        assert!(matches!(err, ActivityError::NotFound { .. }));
    }

    #[test]
    fn confirmations_name_student_and_activity() {
        let signed = Confirmation::SignedUp {
            activity: "Basketball".to_owned(),
            email: "newstudent@mergington.edu".to_owned(),
        };
        assert_eq!(signed.to_string(), "Signed up newstudent@mergington.edu for Basketball");

        let left = Confirmation::Unregistered {
            activity: "Basketball".to_owned(),
            email: "newstudent@mergington.edu".to_owned(),
        };
        assert_eq!(left.to_string(), "Unregistered newstudent@mergington.edu from Basketball");
    }
}
