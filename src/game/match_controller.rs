//! Match controller: setup, the round loop, and the result
//!
//! A match moves `Setup -> Running -> Finished`. Weapons are added and equipped
//! during setup; `start_game` runs rounds until one side drops to zero health
//! (or the round cap is hit) and reports who lost.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::arsenal::WeaponArsenal;
use crate::combat::combatant::Combatant;
use crate::combat::log::{CombatEvent, CombatLog};
use crate::combat::weapons::Weapon;
use crate::core::config::MatchConfig;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{CombatantKind, Side, WeaponId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Setup,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    PlayerDefeated { rounds: u32 },
    EnemyDefeated { rounds: u32 },
    /// Round cap reached with both sides standing
    Stalemate { rounds: u32 },
}

impl MatchOutcome {
    /// Process exit status: 0 enemy defeated, 1 player defeated, 2 stalemate
    pub fn exit_code(self) -> i32 {
        match self {
            MatchOutcome::EnemyDefeated { .. } => 0,
            MatchOutcome::PlayerDefeated { .. } => 1,
            MatchOutcome::Stalemate { .. } => 2,
        }
    }

    pub fn rounds(self) -> u32 {
        match self {
            MatchOutcome::PlayerDefeated { rounds }
            | MatchOutcome::EnemyDefeated { rounds }
            | MatchOutcome::Stalemate { rounds } => rounds,
        }
    }
}

/// Serializable summary of a finished match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub winner: Option<String>,
    pub loser: Option<String>,
    pub rounds: u32,
    pub player_health: i32,
    pub enemy_health: i32,
    pub seed: u64,
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        match (&self.winner, &self.loser) {
            (Some(winner), Some(loser)) => format!(
                "{} beat {} in {} rounds (seed {})",
                winner, loser, self.rounds, self.seed
            ),
            _ => format!("No winner after {} rounds (seed {})", self.rounds, self.seed),
        }
    }
}

pub struct MatchController<R: Rng> {
    player: Combatant,
    enemy: Combatant,
    arsenal: WeaponArsenal,
    config: MatchConfig,
    rng: R,
    phase: MatchPhase,
    rounds: u32,
    outcome: Option<MatchOutcome>,
    log: CombatLog,
}

impl MatchController<ChaCha8Rng> {
    /// Controller whose RNG is seeded from `config.seed`
    pub fn seeded(player: Combatant, enemy: Combatant, config: MatchConfig) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::new(player, enemy, config, rng)
    }
}

impl<R: Rng> MatchController<R> {
    pub fn new(player: Combatant, enemy: Combatant, config: MatchConfig, rng: R) -> Result<Self> {
        config.validate()?;
        if player.kind() != CombatantKind::Player {
            return Err(SkirmishError::InvalidConfig(format!(
                "{} is an {}, expected a player",
                player.name(),
                player.kind()
            )));
        }
        if enemy.kind() != CombatantKind::Enemy {
            return Err(SkirmishError::InvalidConfig(format!(
                "{} is a {}, expected an enemy",
                enemy.name(),
                enemy.kind()
            )));
        }

        Ok(Self {
            player,
            enemy,
            arsenal: WeaponArsenal::new(),
            config,
            rng,
            phase: MatchPhase::Setup,
            rounds: 0,
            outcome: None,
            log: CombatLog::new(),
        })
    }

    /// Replace the trace log, e.g. with one that streams to stdout
    pub fn with_log(mut self, log: CombatLog) -> Self {
        self.log = log;
        self
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn arsenal(&self) -> &WeaponArsenal {
        &self.arsenal
    }

    pub fn arsenal_mut(&mut self) -> &mut WeaponArsenal {
        &mut self.arsenal
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut CombatLog {
        &mut self.log
    }

    /// Split borrow: one side's combatant alongside the arsenal and the RNG
    fn side_parts(&mut self, side: Side) -> (&mut Combatant, &WeaponArsenal, &mut R) {
        let combatant = match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        };
        (combatant, &self.arsenal, &mut self.rng)
    }

    pub fn add_weapon(&mut self, weapon: Weapon) -> WeaponId {
        if self.phase != MatchPhase::Setup {
            tracing::warn!(weapon = weapon.name(), phase = ?self.phase, "weapon added after setup");
        }
        self.arsenal.add_weapon(weapon)
    }

    /// Equip the weapon at `index` onto `side`; false (and no change) if out of range
    pub fn equip_weapon(&mut self, side: Side, index: usize) -> bool {
        let (combatant, arsenal, _) = self.side_parts(side);
        match arsenal.id_at(index) {
            Some(id) => {
                combatant.equip_weapon(id);
                true
            }
            None => {
                tracing::debug!(?side, index, "equip ignored: no weapon at index");
                false
            }
        }
    }

    pub fn equip_player_weapon(&mut self, index: usize) -> bool {
        self.equip_weapon(Side::Player, index)
    }

    pub fn equip_enemy_weapon(&mut self, index: usize) -> bool {
        self.equip_weapon(Side::Enemy, index)
    }

    pub fn equip_random_weapon(&mut self, side: Side) -> Option<WeaponId> {
        let (combatant, arsenal, rng) = self.side_parts(side);
        arsenal.equip_random_weapon(combatant, rng)
    }

    /// One round: the player acts, then the enemy if it is still standing
    fn fight_round(&mut self) {
        self.rounds = self.rounds.saturating_add(1);
        self.player
            .fight(&mut self.enemy, &self.arsenal, &mut self.rng, &mut self.log);
        if self.enemy.is_alive() {
            self.enemy
                .fight(&mut self.player, &self.arsenal, &mut self.rng, &mut self.log);
        }
        tracing::trace!(
            round = self.rounds,
            player_health = self.player.health(),
            enemy_health = self.enemy.health(),
            "round complete"
        );
    }

    /// Run the match to completion
    ///
    /// Calling this again after the match has finished returns the same outcome
    /// without fighting further rounds.
    pub fn start_game(&mut self) -> MatchOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        self.phase = MatchPhase::Running;
        self.log.record(CombatEvent::MatchStarted {
            player: self.player.name().to_string(),
            enemy: self.enemy.name().to_string(),
        });
        tracing::info!(
            player = self.player.name(),
            enemy = self.enemy.name(),
            seed = self.config.seed,
            "match started"
        );

        while self.player.is_alive() && self.enemy.is_alive() {
            if self.config.max_rounds.is_some_and(|cap| self.rounds >= cap) {
                break;
            }
            self.fight_round();
        }

        let outcome = if !self.player.is_alive() {
            self.log.record(CombatEvent::Defeated {
                name: self.player.name().to_string(),
            });
            MatchOutcome::PlayerDefeated {
                rounds: self.rounds,
            }
        } else if !self.enemy.is_alive() {
            self.log.record(CombatEvent::Defeated {
                name: self.enemy.name().to_string(),
            });
            MatchOutcome::EnemyDefeated {
                rounds: self.rounds,
            }
        } else {
            tracing::warn!(rounds = self.rounds, "round cap reached with both sides alive");
            self.log.record(CombatEvent::Stalemate {
                rounds: self.rounds,
            });
            MatchOutcome::Stalemate {
                rounds: self.rounds,
            }
        };

        tracing::info!(?outcome, "match finished");
        self.phase = MatchPhase::Finished;
        self.outcome = Some(outcome);
        outcome
    }

    /// Summary of the match so far; `None` until `start_game` has returned
    pub fn report(&self) -> Option<MatchReport> {
        let outcome = self.outcome?;
        let (winner, loser) = match outcome {
            MatchOutcome::PlayerDefeated { .. } => (Some(&self.enemy), Some(&self.player)),
            MatchOutcome::EnemyDefeated { .. } => (Some(&self.player), Some(&self.enemy)),
            MatchOutcome::Stalemate { .. } => (None, None),
        };
        Some(MatchReport {
            outcome,
            winner: winner.map(|c| c.name().to_string()),
            loser: loser.map(|c| c.name().to_string()),
            rounds: self.rounds,
            player_health: self.player.health(),
            enemy_health: self.enemy.health(),
            seed: self.config.seed,
        })
    }
}
