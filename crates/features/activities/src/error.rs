use std::borrow::Cow;

/// Failures of the activity registry and its seeding.
#[mhs_derive::mhs_error]
pub enum ActivityError {
    /// No activity with that name exists.
    #[error("Activity not found{}", format_context(.context))]
    NotFound { activity: String, context: Option<Cow<'static, str>> },

    /// The email is already on the activity's roster.
    #[error("Student is already signed up for this activity{}", format_context(.context))]
    AlreadySignedUp { activity: String, email: String, context: Option<Cow<'static, str>> },

    /// The email is not on the activity's roster.
    #[error("Student is not registered for this activity{}", format_context(.context))]
    NotRegistered { activity: String, email: String, context: Option<Cow<'static, str>> },

    #[error("Activity seed could not be read{}: {source}", format_context(.context))]
    Seed { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Activity seed is malformed{}: {source}", format_context(.context))]
    SeedFormat { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Activity seed is invalid{}: {message}", format_context(.context))]
    InvalidSeed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The activities slice is not registered in the API state.
    #[cfg(feature = "server")]
    #[error("Activities unavailable{}: {source}", format_context(.context))]
    State {
        source: mhs_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal activities error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
mod http {
    use super::ActivityError;
    use crate::model::ErrorResponse;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    impl ActivityError {
        /// HTTP status reported for this error.
        #[must_use]
        pub const fn status_code(&self) -> StatusCode {
            match self {
                Self::NotFound { .. } | Self::NotRegistered { .. } => StatusCode::NOT_FOUND,
                Self::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
                Self::Seed { .. }
                | Self::SeedFormat { .. }
                | Self::InvalidSeed { .. }
                | Self::State { .. }
                | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for ActivityError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            if status.is_server_error() {
                tracing::error!(error = %self, "Activities request failed");
            }

            (status, Json(ErrorResponse { detail: self.to_string() })).into_response()
        }
    }

}
