use std::fmt;

/// Remote credentials: either nothing, or a complete username/password pair.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    None,
    Pair { username: String, password: String },
}

impl Credentials {
    pub fn pair(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Pair {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Credentials::Pair { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Credentials::Pair { username, .. } => Some(username),
            Credentials::None => None,
        }
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            Credentials::Pair { password, .. } => Some(password),
            Credentials::None => None,
        }
    }
}

// Never print the password, even in debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => f.write_str("Credentials::None"),
            Credentials::Pair { username, .. } => f
                .debug_struct("Credentials::Pair")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
