use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account category shown in the user management screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Normal,
    Gm,
}

impl UserKind {
    /// Label used by the console UI (the product is Chinese-facing).
    pub fn label(&self) -> &'static str {
        match self {
            UserKind::Normal => "普通用户",
            UserKind::Gm => "GM用户",
        }
    }
}

/// A platform account as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub kind: UserKind,
    #[serde(rename = "lastLogin")]
    pub last_login: NaiveDateTime,
}
