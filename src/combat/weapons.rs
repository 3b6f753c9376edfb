//! Weapons: a name and a flat damage rating
//!
//! Damage is multiplied by the wielder's strength when an attack lands.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    damage: i32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Overwrite the damage rating. Zero and negative values are accepted as-is.
    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage;
    }

    /// Common weapon: Sword
    pub fn sword() -> Self {
        Self::new("Sword", 15)
    }

    /// Common weapon: Axe
    pub fn axe() -> Self {
        Self::new("Axe", 20)
    }

    /// Common weapon: Dagger
    pub fn dagger() -> Self {
        Self::new("Dagger", 10)
    }

    /// Common weapon: Bow
    pub fn bow() -> Self {
        Self::new("Bow", 25)
    }
}
