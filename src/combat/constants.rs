//! Combat system constants - all tunable values in one place

/// Smallest amount a random heal restores
pub const HEAL_MIN: i32 = 1;
/// Largest amount a random heal restores (inclusive)
pub const HEAL_MAX: i32 = 50;

/// Health never drops below this floor
pub const HEALTH_FLOOR: i32 = 0;
