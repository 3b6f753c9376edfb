//! The built-in Hero vs Goblin scenario

use rand::Rng;

use crate::combat::combatant::Combatant;
use crate::combat::weapons::Weapon;
use crate::core::config::MatchConfig;
use crate::core::error::Result;
use crate::core::types::Side;
use crate::game::match_controller::MatchController;

pub const PLAYER_NAME: &str = "Hero";
pub const PLAYER_HEALTH: i32 = 300;
pub const PLAYER_STRENGTH: i32 = 2;

pub const ENEMY_NAME: &str = "Goblin";
pub const ENEMY_HEALTH: i32 = 150;
pub const ENEMY_STRENGTH: i32 = 4;

/// Arsenal indices equipped by default: Sword for the player, Axe for the enemy
pub const PLAYER_WEAPON_INDEX: usize = 0;
pub const ENEMY_WEAPON_INDEX: usize = 1;

/// How weapons get handed out before the match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loadout {
    /// Sword to the player, Axe to the enemy
    #[default]
    Fixed,
    /// Each side draws from the arsenal at random
    Random,
}

pub fn standard_weapons() -> [Weapon; 4] {
    [Weapon::sword(), Weapon::axe(), Weapon::dagger(), Weapon::bow()]
}

/// Build the scenario's controller in the setup phase, weapons stocked and equipped
pub fn build<R: Rng>(config: MatchConfig, rng: R, loadout: Loadout) -> Result<MatchController<R>> {
    let player = Combatant::player(PLAYER_NAME, PLAYER_HEALTH, PLAYER_STRENGTH);
    let enemy = Combatant::enemy(ENEMY_NAME, ENEMY_HEALTH, ENEMY_STRENGTH);
    let mut game = MatchController::new(player, enemy, config, rng)?;

    for weapon in standard_weapons() {
        game.add_weapon(weapon);
    }

    match loadout {
        Loadout::Fixed => {
            game.equip_player_weapon(PLAYER_WEAPON_INDEX);
            game.equip_enemy_weapon(ENEMY_WEAPON_INDEX);
        }
        Loadout::Random => {
            game.equip_random_weapon(Side::Player);
            game.equip_random_weapon(Side::Enemy);
        }
    }

    Ok(game)
}
