//! Skirmish - Turn-based duel simulator

pub mod combat;
pub mod core;
pub mod game;
