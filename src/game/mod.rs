pub mod match_controller;
pub mod scenario;

pub use match_controller::{MatchController, MatchOutcome, MatchPhase, MatchReport};
pub use scenario::Loadout;
