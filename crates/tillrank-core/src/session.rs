//! Auth session - explicit two-state context owned by the app root

/// Login state for the running app. Created logged out at startup, updated
/// only by explicit login/logout; there is no expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        email: String,
    },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, email: impl Into<String>) {
        *self = Session::LoggedIn {
            email: email.into(),
        };
    }

    pub fn logout(&mut self) {
        *self = Session::LoggedOut;
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { email } => Some(email),
            Session::LoggedOut => None,
        }
    }
}
