use serde::{Deserialize, Serialize};

/// Which of the four consoles a session is allowed to enter.
///
/// `Admin` may enter every console; the other roles only their own
/// (plus the user center, which any authenticated session may open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleRole {
    Admin,
    Gm,
    TechAgent,
    User,
}

impl ConsoleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleRole::Admin => "admin",
            ConsoleRole::Gm => "gm",
            ConsoleRole::TechAgent => "tech-agent",
            ConsoleRole::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(ConsoleRole::Admin),
            "gm" => Some(ConsoleRole::Gm),
            "tech-agent" => Some(ConsoleRole::TechAgent),
            "user" => Some(ConsoleRole::User),
            _ => None,
        }
    }

    /// Home path of the console this role lands on after login.
    pub fn home_path(&self) -> &'static str {
        match self {
            ConsoleRole::Admin => "/admin",
            ConsoleRole::Gm => "/gm",
            ConsoleRole::TechAgent => "/tech-agent",
            ConsoleRole::User => "/user-center",
        }
    }

    pub fn can_enter(&self, console: ConsoleRole) -> bool {
        match self {
            ConsoleRole::Admin => true,
            role => *role == console || console == ConsoleRole::User,
        }
    }
}

/// Identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub email: String,
    pub role: ConsoleRole,
}

impl SessionInfo {
    pub fn new(email: impl Into<String>, role: ConsoleRole) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }

    /// Display name derived from the mailbox part of the email.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Result of consulting the session flag store at mount time.
///
/// The dashboard shells take this explicitly instead of reaching into
/// ambient storage themselves; `Anonymous` means "redirect to login".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthCheck {
    Authenticated(SessionInfo),
    #[default]
    Anonymous,
}

impl AuthCheck {
    pub fn session(&self) -> Option<&SessionInfo> {
        match self {
            AuthCheck::Authenticated(info) => Some(info),
            AuthCheck::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthCheck::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            ConsoleRole::Admin,
            ConsoleRole::Gm,
            ConsoleRole::TechAgent,
            ConsoleRole::User,
        ] {
            assert_eq!(ConsoleRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(ConsoleRole::from_str("superuser"), None);
    }

    #[test]
    fn test_admin_enters_everything() {
        let admin = ConsoleRole::Admin;
        assert!(admin.can_enter(ConsoleRole::Gm));
        assert!(admin.can_enter(ConsoleRole::TechAgent));
        assert!(admin.can_enter(ConsoleRole::User));
    }

    #[test]
    fn test_user_only_enters_user_center() {
        let user = ConsoleRole::User;
        assert!(user.can_enter(ConsoleRole::User));
        assert!(!user.can_enter(ConsoleRole::Admin));
        assert!(!user.can_enter(ConsoleRole::Gm));
    }

    #[test]
    fn test_gm_also_enters_user_center() {
        assert!(ConsoleRole::Gm.can_enter(ConsoleRole::User));
        assert!(!ConsoleRole::Gm.can_enter(ConsoleRole::TechAgent));
    }

    #[test]
    fn test_display_name() {
        let info = SessionInfo::new("admin@example.com", ConsoleRole::Admin);
        assert_eq!(info.display_name(), "admin");
    }

    #[test]
    fn test_anonymous_has_no_session() {
        assert!(AuthCheck::Anonymous.session().is_none());
        assert!(!AuthCheck::Anonymous.is_authenticated());
        let check = AuthCheck::Authenticated(SessionInfo::new("a@b.c", ConsoleRole::User));
        assert!(check.is_authenticated());
    }
}
