use crate::domain::ports::TokenProvider;

/// The original app ships with a hard-coded test session.
pub const TEST_TOKEN: &str = "d2340b3db37f1f920464f211e8db0f7c8f5799a7";
pub const TEST_USER_NAME: &str = "Tester";

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub logged_in: bool,
    pub user_name: Option<String>,
    pub token: Option<String>,
}

/// Stub auth provider. There is no login flow, refresh, or expiry
/// handling; the session is fixed at construction time.
#[derive(Debug, Clone)]
pub struct StubAuth {
    session: AuthSession,
}

impl StubAuth {
    /// The built-in test session.
    pub fn test_session() -> Self {
        Self::with_token(TEST_TOKEN)
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            session: AuthSession {
                logged_in: true,
                user_name: Some(TEST_USER_NAME.to_string()),
                token: Some(token.to_string()),
            },
        }
    }

    /// A session with no credentials, for unauthenticated flows.
    pub fn anonymous() -> Self {
        Self {
            session: AuthSession { logged_in: false, user_name: None, token: None },
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }
}

impl TokenProvider for StubAuth {
    fn token(&self) -> Option<String> {
        self.session.token.clone()
    }
}
