//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a weapon stored in a `WeaponArsenal`
///
/// The arsenal is append-only, so a handle stays valid for the arsenal's lifetime
/// no matter how many weapons are added after it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponId(pub usize);

impl WeaponId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which role a combatant plays in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantKind {
    /// Heals a random amount after every attack
    Player,
    /// Attacks only
    Enemy,
}

impl CombatantKind {
    /// Does this kind recover health at the end of its turn?
    pub fn heals_after_attack(self) -> bool {
        matches!(self, CombatantKind::Player)
    }
}

impl fmt::Display for CombatantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatantKind::Player => write!(f, "player"),
            CombatantKind::Enemy => write!(f, "enemy"),
        }
    }
}

/// Side selector for controller operations that target one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_player_heals() {
        assert!(CombatantKind::Player.heals_after_attack());
        assert!(!CombatantKind::Enemy.heals_after_attack());
    }

    #[test]
    fn test_weapon_id_index() {
        assert_eq!(WeaponId(3).index(), 3);
    }
}
