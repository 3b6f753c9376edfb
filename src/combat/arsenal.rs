//! Weapon arsenal: owns every weapon in a match
//!
//! Weapons are only ever appended, so the `WeaponId` handed out for a weapon keeps
//! pointing at it no matter how many are added later.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::weapons::Weapon;
use crate::core::types::WeaponId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponArsenal {
    weapons: Vec<Weapon>,
}

impl WeaponArsenal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a weapon and return its handle
    pub fn add_weapon(&mut self, weapon: Weapon) -> WeaponId {
        let id = WeaponId(self.weapons.len());
        tracing::trace!(weapon = weapon.name(), index = id.index(), "weapon added");
        self.weapons.push(weapon);
        id
    }

    /// Bounds-checked lookup by position
    pub fn get_weapon(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    /// Handle for the weapon at `index`, if there is one
    pub fn id_at(&self, index: usize) -> Option<WeaponId> {
        (index < self.weapons.len()).then_some(WeaponId(index))
    }

    pub fn weapon(&self, id: WeaponId) -> Option<&Weapon> {
        self.weapons.get(id.index())
    }

    /// Mutable access; changes are seen by every combatant holding `id`
    pub fn weapon_mut(&mut self, id: WeaponId) -> Option<&mut Weapon> {
        self.weapons.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponId, &Weapon)> {
        self.weapons
            .iter()
            .enumerate()
            .map(|(i, w)| (WeaponId(i), w))
    }

    /// Equip a uniformly chosen weapon onto `combatant`
    ///
    /// An empty arsenal leaves the combatant untouched and returns `None`.
    pub fn equip_random_weapon<R: Rng>(
        &self,
        combatant: &mut Combatant,
        rng: &mut R,
    ) -> Option<WeaponId> {
        if self.weapons.is_empty() {
            return None;
        }
        let id = WeaponId(rng.gen_range(0..self.weapons.len()));
        combatant.equip_weapon(id);
        tracing::debug!(
            combatant = combatant.name(),
            weapon = self.weapons[id.index()].name(),
            "random weapon equipped"
        );
        Some(id)
    }
}
