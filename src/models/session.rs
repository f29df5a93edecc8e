use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::disclaimer::Disclaimer;

/// Per-session gate state.
///
/// Authentication is not stored: the password is re-checked on every
/// interaction. Only the disclaimer acknowledgement survives between
/// interactions, and it is monotonic for the life of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    pub disclaimer_accepted: bool,
}

impl SessionFlags {
    pub fn accept_disclaimer(&mut self) {
        self.disclaimer_accepted = true;
    }
}

/// Where a session currently sits in the access sequence.
///
/// - `AwaitingPassword`: nothing was entered on this interaction; the prompt is shown
/// - `AwaitingDisclaimer`: password accepted, disclaimer not yet acknowledged
/// - `Ready`: the estimator is reachable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitingPassword,
    AwaitingDisclaimer,
    Ready,
}

impl Stage {
    /// Stage reached by an interaction that passed the password gate.
    pub fn after_gate(flags: &SessionFlags) -> Self {
        if flags.disclaimer_accepted {
            Self::Ready
        } else {
            Self::AwaitingDisclaimer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingPassword => "awaiting_password",
            Self::AwaitingDisclaimer => "awaiting_disclaimer",
            Self::Ready => "ready",
        }
    }
}

/// A session as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub stage: Stage,
    pub disclaimer_accepted: bool,
    pub created_at: DateTime<Utc>,
    /// Password prompt, present only while awaiting the password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Present only while the session is awaiting acknowledgement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<Disclaimer>,
}
