//! End-to-end tests for the Hero vs Goblin duel
//!
//! The Hero always deals 15 * 2 = 30 per round, the Goblin 20 * 4 = 80. Only the
//! Hero's heals are random, so the round count is fixed by whoever falls first.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish::combat::{CombatEvent, CombatLog, Weapon};
use skirmish::core::config::MatchConfig;
use skirmish::game::scenario::{self, Loadout};
use skirmish::game::{MatchController, MatchOutcome, MatchPhase};

fn standard_match(seed: u64) -> MatchController<ChaCha8Rng> {
    scenario::build(
        MatchConfig::with_seed(seed),
        ChaCha8Rng::seed_from_u64(seed),
        Loadout::Fixed,
    )
    .unwrap()
}

#[test]
fn test_first_round_trace() {
    let mut game = standard_match(2024);
    game.start_game();

    let lines: Vec<String> = game.log().lines().collect();
    assert_eq!(lines[0], "Game started: Hero vs Goblin");
    assert_eq!(lines[1], "Hero attacks Goblin with Sword");
    assert_eq!(lines[2], "Goblin takes damage 30");
    assert_eq!(lines[3], "Goblin health: 120");

    let heal = match &game.log().events[4] {
        CombatEvent::Healed { name, amount } => {
            assert_eq!(name, "Hero");
            *amount
        }
        other => panic!("expected a heal, got {:?}", other),
    };
    assert!((1..=50).contains(&heal));

    assert_eq!(lines[5], "Goblin attacks Hero with Axe");
    assert_eq!(lines[6], "Hero takes damage 80");
    assert_eq!(lines[7], format!("Hero health: {}", 300 + heal - 80));
}

#[test]
fn test_outcome_matches_who_fell() {
    for seed in 0..200 {
        let mut game = standard_match(seed);
        let outcome = game.start_game();
        assert_eq!(game.phase(), MatchPhase::Finished);

        match outcome {
            MatchOutcome::EnemyDefeated { rounds } => {
                assert_eq!(rounds, 5, "seed {}", seed);
                assert_eq!(outcome.exit_code(), 0);
                assert_eq!(game.enemy().health(), 0);
                assert!(game.player().is_alive());
                assert_eq!(
                    game.log().lines().last().unwrap(),
                    "Goblin has been defeated."
                );
            }
            MatchOutcome::PlayerDefeated { rounds } => {
                assert_eq!(rounds, 4, "seed {}", seed);
                assert_eq!(outcome.exit_code(), 1);
                assert_eq!(game.player().health(), 0);
                assert!(game.enemy().is_alive());
                assert_eq!(game.log().lines().last().unwrap(), "Hero has been defeated.");
            }
            MatchOutcome::Stalemate { .. } => panic!("seed {} stalemated", seed),
        }
    }
}

#[test]
fn test_same_seed_same_trace() {
    let mut a = standard_match(77);
    let mut b = standard_match(77);
    assert_eq!(a.start_game(), b.start_game());
    assert_eq!(a.log().events, b.log().events);
}

#[test]
fn test_damage_change_applies_to_equipped_weapon() {
    let mut game = standard_match(5);
    // Axe is index 1 and already in the Goblin's hands
    let axe = game.enemy().weapon().unwrap();
    game.arsenal_mut().weapon_mut(axe).unwrap().set_damage(0);

    let outcome = game.start_game();
    assert_eq!(outcome, MatchOutcome::EnemyDefeated { rounds: 5 });
    // Goblin hits for zero; Hero only heals
    assert!(game.player().health() > 300);
}

#[test]
fn test_heals_accumulate_past_starting_health() {
    let mut game = MatchController::seeded(
        skirmish::combat::Combatant::player("Hero", 300, 2),
        skirmish::combat::Combatant::enemy("Goblin", 150, 4),
        MatchConfig {
            seed: 3,
            max_rounds: Some(200),
        },
    )
    .unwrap();
    game.add_weapon(Weapon::new("Feather", 0));
    game.equip_player_weapon(0);
    game.equip_enemy_weapon(0);

    let outcome = game.start_game();
    assert_eq!(outcome, MatchOutcome::Stalemate { rounds: 200 });
    assert!(game.player().health() >= 300 + 200);
}

#[test]
fn test_report_serializes() {
    let mut game = standard_match(11);
    game.start_game();
    let report = game.report().unwrap();
    assert_eq!(report.seed, 11);

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["seed"], 11);
    assert!(value["winner"].is_string());
}

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_trace_streams_to_sink_line_for_line() {
    let buffer = SharedBuffer::default();
    let mut game = standard_match(31).with_log(CombatLog::with_sink(Box::new(buffer.clone())));
    game.start_game();

    let streamed = String::from_utf8(buffer.0.borrow().clone()).unwrap();
    let streamed: Vec<&str> = streamed.lines().collect();
    let recorded: Vec<String> = game.log().lines().collect();
    assert_eq!(streamed, recorded);
    assert!(game.log_mut().finish().is_ok());
}

#[test]
fn test_uncapped_match_streams_without_history() {
    let buffer = SharedBuffer::default();
    let mut game = MatchController::seeded(
        skirmish::combat::Combatant::player("Hero", 300, 2),
        skirmish::combat::Combatant::enemy("Goblin", 150, 4),
        MatchConfig {
            seed: 8,
            max_rounds: None,
        },
    )
    .unwrap()
    .with_log(CombatLog::with_sink(Box::new(buffer.clone())).without_history());
    game.add_weapon(Weapon::dagger());
    game.equip_player_weapon(0);

    let outcome = game.start_game();
    assert_eq!(outcome, MatchOutcome::EnemyDefeated { rounds: 8 });
    assert!(game.log().is_empty());

    let streamed = String::from_utf8(buffer.0.borrow().clone()).unwrap();
    assert_eq!(streamed.lines().next(), Some("Game started: Hero vs Goblin"));
    assert_eq!(streamed.lines().last(), Some("Goblin has been defeated."));
}
