//! Combat events and the match trace
//!
//! Every observable step of a match is recorded as a `CombatEvent`. The binary
//! streams one line per event to stdout as the match runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::core::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    MatchStarted { player: String, enemy: String },
    Attack { attacker: String, target: String, weapon: String },
    DamageTaken { name: String, amount: i32 },
    HealthReport { name: String, health: i32 },
    Healed { name: String, amount: i32 },
    Defeated { name: String },
    Stalemate { rounds: u32 },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::MatchStarted { player, enemy } => {
                write!(f, "Game started: {} vs {}", player, enemy)
            }
            CombatEvent::Attack {
                attacker,
                target,
                weapon,
            } => write!(f, "{} attacks {} with {}", attacker, target, weapon),
            CombatEvent::DamageTaken { name, amount } => {
                write!(f, "{} takes damage {}", name, amount)
            }
            CombatEvent::HealthReport { name, health } => write!(f, "{} health: {}", name, health),
            CombatEvent::Healed { name, amount } => {
                write!(f, "{} healed by {} points.", name, amount)
            }
            CombatEvent::Defeated { name } => write!(f, "{} has been defeated.", name),
            CombatEvent::Stalemate { rounds } => {
                write!(f, "No winner after {} rounds; match abandoned.", rounds)
            }
        }
    }
}

/// Ordered trace of a match
///
/// With a sink attached every event is written the moment it is recorded.
/// History can be switched off so a long match does not grow memory.
#[derive(Default)]
pub struct CombatLog {
    pub events: Vec<CombatEvent>,
    sink: Option<Box<dyn Write>>,
    discard_history: bool,
    /// First write failure; later writes are skipped
    sink_error: Option<io::Error>,
}

impl fmt::Debug for CombatLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombatLog")
            .field("events", &self.events.len())
            .field("streaming", &self.sink.is_some())
            .field("discard_history", &self.discard_history)
            .finish()
    }
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that writes each event to `sink` as a line when recorded
    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        Self {
            sink: Some(sink),
            ..Default::default()
        }
    }

    /// Stop keeping recorded events in `events`
    pub fn without_history(mut self) -> Self {
        self.discard_history = true;
        self
    }

    pub fn record(&mut self, event: CombatEvent) {
        tracing::debug!(event = ?event, "combat event");

        if self.sink_error.is_none() {
            if let Some(sink) = self.sink.as_mut() {
                if let Err(e) = writeln!(sink, "{}", event) {
                    tracing::warn!(error = %e, "trace sink failed; further lines dropped");
                    self.sink_error = Some(e);
                }
            }
        }

        if !self.discard_history {
            self.events.push(event);
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Rendered trace lines, in order
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(|e| e.to_string())
    }

    /// Flush the sink and surface the first write error, if any
    pub fn finish(&mut self) -> Result<()> {
        if let Some(e) = self.sink_error.take() {
            return Err(e.into());
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}
