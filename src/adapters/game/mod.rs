//! Running game server collaborator
//!
//! The console never owns game state. It reads online player snapshots
//! through [`GameServer`], which the hosting process implements over its
//! live world.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Point-in-time view of one online player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub level: i32,
    pub class: String,
    pub gender: String,
    pub map_name: String,
    pub location: (i32, i32),
    pub gold: i64,
    pub game_gold: i32,
    pub account_email: String,
    pub pk_points: i32,
}

/// Narrow read access to the running server
pub trait GameServer: Send + Sync {
    /// Snapshots of every player currently online, in any order
    fn online_players(&self) -> Vec<PlayerSnapshot>;

    fn online_count(&self) -> usize {
        self.online_players().len()
    }
}

/// Fixed player list, for embedding hosts without a live world and for tests
#[derive(Debug, Default)]
pub struct StaticGameServer {
    players: RwLock<Vec<PlayerSnapshot>>,
}

impl StaticGameServer {
    pub fn new(players: Vec<PlayerSnapshot>) -> Self {
        Self {
            players: RwLock::new(players),
        }
    }

    pub fn set_players(&self, players: Vec<PlayerSnapshot>) {
        *self.players.write() = players;
    }
}

impl GameServer for StaticGameServer {
    fn online_players(&self) -> Vec<PlayerSnapshot> {
        self.players.read().clone()
    }

    fn online_count(&self) -> usize {
        self.players.read().len()
    }
}
