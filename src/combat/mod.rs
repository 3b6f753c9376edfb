pub mod arsenal;
pub mod combatant;
pub mod constants;
pub mod log;
pub mod weapons;

pub use arsenal::WeaponArsenal;
pub use combatant::Combatant;
pub use log::{CombatEvent, CombatLog};
pub use weapons::Weapon;
