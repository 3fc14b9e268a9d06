//! Course id generation
//!
//! Ids are assigned once, at creation, and never regenerated.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Produces identifiers for newly created courses
pub trait IdGenerator: Send + Sync {
    /// Next identifier. Must be non-empty.
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic decimal ids
#[derive(Debug)]
pub struct CounterIdGenerator {
    next: AtomicU64,
}

impl CounterIdGenerator {
    /// Start issuing ids at `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for CounterIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Decimal draw from `[0, 100)`.
///
/// Collisions with existing ids are possible and not checked.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub const UPPER_BOUND: u32 = 100;
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        rand::thread_rng().gen_range(0..Self::UPPER_BOUND).to_string()
    }
}

/// Configurable id strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Counter,
    Random,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Uuid => "uuid",
            IdStrategy::Counter => "counter",
            IdStrategy::Random => "random",
        }
    }

    /// Build the generator for this strategy.
    ///
    /// `existing` is the number of courses already in the store; the counter
    /// starts past them so it does not reissue seeded ids.
    pub fn build(&self, existing: usize) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Counter => Box::new(CounterIdGenerator::starting_at(existing as u64 + 1)),
            IdStrategy::Random => Box::new(RandomIdGenerator),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "counter" => Ok(IdStrategy::Counter),
            "random" => Ok(IdStrategy::Random),
            other => Err(format!(
                "unknown id strategy '{}', expected uuid, counter or random",
                other
            )),
        }
    }
}
