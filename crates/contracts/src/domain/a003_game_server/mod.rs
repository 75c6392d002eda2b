use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Hash: the server list keys rows by (id, status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    Normal,
    Maintenance,
}

impl ServerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServerStatus::Normal => "正常",
            ServerStatus::Maintenance => "维护中",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ServerStatus::Normal => ServerStatus::Maintenance,
            ServerStatus::Maintenance => ServerStatus::Normal,
        }
    }
}

/// One region server (区服) of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameServer {
    pub id: u32,
    pub name: String,
    pub ip: String,
    pub status: ServerStatus,
    /// Scheduled end of the current maintenance window, when one is set.
    #[serde(rename = "maintenanceUntil")]
    pub maintenance_until: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_status_keys_a_row_set() {
        let mut keys: HashSet<(u32, ServerStatus)> = HashSet::new();
        assert!(keys.insert((1, ServerStatus::Normal)));
        assert!(keys.insert((1, ServerStatus::Maintenance)));
        assert!(!keys.insert((1, ServerStatus::Normal)));
    }
}
