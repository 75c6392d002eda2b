use chrono::{Duration, NaiveDate, NaiveDateTime};
use contracts::domain::a003_game_server::{GameServer, ServerStatus};

/// Length of a scheduled maintenance window.
const MAINTENANCE_WINDOW_HOURS: i64 = 2;

pub fn generate_servers(count: u32) -> Vec<GameServer> {
    (1..=count)
        .map(|i| {
            let status = if i % 5 == 0 {
                ServerStatus::Maintenance
            } else {
                ServerStatus::Normal
            };
            GameServer {
                id: i,
                name: format!("区服{}", i),
                ip: format!("192.168.1.{}", i),
                status,
                maintenance_until: match status {
                    ServerStatus::Maintenance => NaiveDate::from_ymd_opt(2024, 6, (i % 28) + 1)
                        .unwrap_or_default()
                        .and_hms_opt(22, 0, 0),
                    ServerStatus::Normal => None,
                },
            }
        })
        .collect()
}

pub fn next_server_id(servers: &[GameServer]) -> u32 {
    servers.iter().map(|server| server.id).max().unwrap_or(0) + 1
}

/// Flip a server's status. Entering 维护 schedules the window end from
/// `now`; returning to 正常 clears it.
pub fn toggle_server(server: &mut GameServer, now: NaiveDateTime) {
    server.status = server.status.toggled();
    server.maintenance_until = match server.status {
        ServerStatus::Maintenance => Some(now + Duration::hours(MAINTENANCE_WINDOW_HOURS)),
        ServerStatus::Normal => None,
    };
}

/// Mock CDK check: any non-blank code is accepted.
pub fn verify_cdk(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        Err("请输入CDK码")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_servers_marks_every_fifth_in_maintenance() {
        let servers = generate_servers(20);
        let maintenance: Vec<u32> = servers
            .iter()
            .filter(|server| server.status == ServerStatus::Maintenance)
            .map(|server| server.id)
            .collect();
        assert_eq!(maintenance, vec![5, 10, 15, 20]);
    }

    #[test]
    fn test_maintenance_servers_carry_a_window_end() {
        for server in generate_servers(20) {
            match server.status {
                ServerStatus::Maintenance => assert!(server.maintenance_until.is_some()),
                ServerStatus::Normal => assert!(server.maintenance_until.is_none()),
            }
        }
    }

    #[test]
    fn test_toggle_schedules_and_clears_the_window() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let mut server = generate_servers(1).remove(0);
        assert_eq!(server.status, ServerStatus::Normal);

        toggle_server(&mut server, now);
        assert_eq!(server.status, ServerStatus::Maintenance);
        assert_eq!(
            server.maintenance_until,
            Some(now + Duration::hours(MAINTENANCE_WINDOW_HOURS))
        );

        toggle_server(&mut server, now);
        assert_eq!(server.status, ServerStatus::Normal);
        assert_eq!(server.maintenance_until, None);
    }

    #[test]
    fn test_next_server_id() {
        let mut servers = generate_servers(3);
        assert_eq!(next_server_id(&servers), 4);
        servers.retain(|server| server.id != 3);
        assert_eq!(next_server_id(&servers), 3);
    }

    #[test]
    fn test_verify_cdk_rejects_blank() {
        assert!(verify_cdk("  ").is_err());
        assert!(verify_cdk("ABCD-1234").is_ok());
    }
}
