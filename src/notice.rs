use crate::actions::create_poll::CreatePollError;

/// How a transient notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A short-lived notification for the user surface to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            severity: Severity::Error,
        }
    }
}

/// The toast shown once a submission settles.
pub fn submission_notice(result: &Result<(), CreatePollError>) -> Notice {
    match result {
        Ok(()) => Notice::success("Conversation Poll Created!"),
        Err(error) => {
            tracing::error!(error = %error, "poll creation failed");
            Notice::error("Unable to create conversation poll")
        }
    }
}
