use serde::{Deserialize, Serialize};

/// Login tab a credential belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Household users, identified by email
    #[default]
    User,
    /// Staff, identified by username
    Admin,
}

impl Role {
    /// Dashboard a successful login lands on
    pub fn destination(&self) -> &'static str {
        match self {
            Role::User => "user-dashboard.html",
            Role::Admin => "admin-dashboard.html",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Role::User => "Login successful! Redirecting to user dashboard...",
            Role::Admin => "Admin login successful! Redirecting to admin dashboard...",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Role::User => "Invalid email or password. Please try again.",
            Role::Admin => "Invalid username or password. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    /// Email for the user tab, username for the admin tab
    pub identifier: String,
    pub secret: String,
}

impl Credential {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }
}

/// Read-only mapping from tab to the single credential accepted on it
#[derive(Debug, Clone)]
pub struct CredentialBook {
    user: Credential,
    admin: Credential,
}

impl CredentialBook {
    pub fn new(user: Credential, admin: Credential) -> Self {
        Self { user, admin }
    }

    pub fn get(&self, role: Role) -> &Credential {
        match role {
            Role::User => &self.user,
            Role::Admin => &self.admin,
        }
    }

    /// Exact comparison against the record of `role` only
    pub fn authenticate(&self, role: Role, identifier: &str, secret: &str) -> bool {
        self.get(role).matches(identifier, secret)
    }
}

impl Default for CredentialBook {
    fn default() -> Self {
        Self::new(
            Credential::new("user@ewastenet.com", "user123"),
            Credential::new("admin", "admin123"),
        )
    }
}
