//! Online player queries

use crate::adapters::game::{GameServer, PlayerSnapshot};
use std::sync::Arc;

/// Read-only player views over the running server
pub struct PlayerService {
    server: Arc<dyn GameServer>,
}

impl PlayerService {
    pub fn new(server: Arc<dyn GameServer>) -> Self {
        Self { server }
    }

    /// Online players, highest level first
    pub fn online_players(&self) -> Vec<PlayerSnapshot> {
        let mut players = self.server.online_players();
        players.sort_by(|a, b| b.level.cmp(&a.level));
        players
    }

    pub fn online_count(&self) -> usize {
        self.server.online_count()
    }

    /// Finds an online player by character name, ignoring case
    pub fn find(&self, name: &str) -> Option<PlayerSnapshot> {
        self.server
            .online_players()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Players whose name or account email contains `keyword`, ignoring case
    ///
    /// A blank keyword returns every online player.
    pub fn search(&self, keyword: &str) -> Vec<PlayerSnapshot> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return self.online_players();
        }
        self.online_players()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&keyword)
                    || p.account_email.to_lowercase().contains(&keyword)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::game::StaticGameServer;

    fn player(name: &str, level: i32, email: &str) -> PlayerSnapshot {
        PlayerSnapshot {
            name: name.to_string(),
            level,
            class: "Warrior".to_string(),
            gender: "Male".to_string(),
            map_name: "Bichon Province".to_string(),
            location: (300, 300),
            gold: 1_000,
            game_gold: 0,
            account_email: email.to_string(),
            pk_points: 0,
        }
    }

    fn service() -> PlayerService {
        PlayerService::new(Arc::new(StaticGameServer::new(vec![
            player("Ayla", 12, "ayla@mail.test"),
            player("Borin", 40, "b@guild.test"),
            player("Cress", 25, "cress@guild.test"),
        ])))
    }

    #[test]
    fn test_sorted_by_level_descending() {
        let names: Vec<_> = service().online_players().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Borin", "Cress", "Ayla"]);
    }

    #[test]
    fn test_count_and_find() {
        let service = service();
        assert_eq!(service.online_count(), 3);
        assert_eq!(service.find("cress").unwrap().level, 25);
        assert!(service.find("Dana").is_none());
    }

    #[test]
    fn test_search_name_or_email() {
        let service = service();
        let by_email: Vec<_> = service.search("GUILD").into_iter().map(|p| p.name).collect();
        assert_eq!(by_email, ["Borin", "Cress"]);
        assert_eq!(service.search("ayl").len(), 1);
        assert_eq!(service.search("  ").len(), 3);
    }
}
