//! Combatants: the player and the enemy
//!
//! Both share one data type. `CombatantKind` decides what happens after an attack:
//! players heal a random amount, enemies do nothing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::arsenal::WeaponArsenal;
use crate::combat::constants::{HEALTH_FLOOR, HEAL_MAX, HEAL_MIN};
use crate::combat::log::{CombatEvent, CombatLog};
use crate::core::types::{CombatantKind, WeaponId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    health: i32,
    strength: i32,
    /// Handle into the arsenal; the combatant never owns the weapon
    weapon: Option<WeaponId>,
    kind: CombatantKind,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: i32, strength: i32, kind: CombatantKind) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            weapon: None,
            kind,
        }
    }

    pub fn player(name: impl Into<String>, health: i32, strength: i32) -> Self {
        Self::new(name, health, strength, CombatantKind::Player)
    }

    pub fn enemy(name: impl Into<String>, health: i32, strength: i32) -> Self {
        Self::new(name, health, strength, CombatantKind::Enemy)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    pub fn weapon(&self) -> Option<WeaponId> {
        self.weapon
    }

    /// Swap the equipped weapon handle
    pub fn equip_weapon(&mut self, weapon: WeaponId) {
        self.weapon = Some(weapon);
    }

    pub fn is_alive(&self) -> bool {
        self.health > HEALTH_FLOOR
    }

    /// Subtract `amount` from health, clamped at zero
    ///
    /// Negative amounts raise health; nothing rejects them.
    pub fn take_damage(&mut self, amount: i32, log: &mut CombatLog) {
        self.health = self.health.saturating_sub(amount).max(HEALTH_FLOOR);
        log.record(CombatEvent::DamageTaken {
            name: self.name.clone(),
            amount,
        });
    }

    /// Raise health by `amount`. There is no maximum.
    pub fn heal(&mut self, amount: i32, log: &mut CombatLog) {
        self.health = self.health.saturating_add(amount);
        log.record(CombatEvent::Healed {
            name: self.name.clone(),
            amount,
        });
    }

    /// Heal by a uniform draw from `HEAL_MIN..=HEAL_MAX`, returning the amount
    pub fn heal_randomly<R: Rng>(&mut self, rng: &mut R, log: &mut CombatLog) -> i32 {
        let amount = rng.gen_range(HEAL_MIN..=HEAL_MAX);
        self.heal(amount, log);
        amount
    }

    /// Strike `target` with the equipped weapon
    ///
    /// Without a weapon (or with a handle the arsenal does not know) this does
    /// nothing at all: no damage and no trace. Returns the damage dealt.
    pub fn attack(
        &self,
        target: &mut Combatant,
        arsenal: &WeaponArsenal,
        log: &mut CombatLog,
    ) -> Option<i32> {
        let weapon = self.weapon.and_then(|id| arsenal.weapon(id))?;
        let damage = weapon.damage().saturating_mul(self.strength);

        log.record(CombatEvent::Attack {
            attacker: self.name.clone(),
            target: target.name.clone(),
            weapon: weapon.name().to_string(),
        });
        target.take_damage(damage, log);
        log.record(CombatEvent::HealthReport {
            name: target.name.clone(),
            health: target.health,
        });

        Some(damage)
    }

    /// Take this combatant's full turn against `opponent`
    ///
    /// Players heal after attacking whether or not the attack landed.
    pub fn fight<R: Rng>(
        &mut self,
        opponent: &mut Combatant,
        arsenal: &WeaponArsenal,
        rng: &mut R,
        log: &mut CombatLog,
    ) {
        self.attack(opponent, arsenal, log);
        if self.kind.heals_after_attack() {
            self.heal_randomly(rng, log);
        }
    }
}
