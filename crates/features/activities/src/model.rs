use indexmap::IndexMap;
use mhs_derive::api_model;

/// Activity records keyed by activity name, in seed order.
pub type Catalog = IndexMap<String, Activity>;

/// A school activity and its roster.
#[api_model(rename_all = "snake_case")]
#[derive(PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity; signups beyond it are accepted.
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.extend(participants.into_iter().map(Into::into));
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// `?email=` query of the roster endpoints.
#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation body of a successful roster change.
#[api_model]
pub struct MessageResponse {
    pub message: String,
}

/// Error body; `detail` carries the human-readable reason.
#[api_model]
pub struct ErrorResponse {
    pub detail: String,
}
