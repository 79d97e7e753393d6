//! Clock and id adapters backed by the host system.

use chrono::{Datelike, Local};
use plugkit_core::application::ports::{Clock, IdGenerator};
use uuid::Uuid;

/// Reads the year from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Random (v4) project UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// A clock stuck on one year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Always hands out the same UUID.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(pub Uuid);

impl IdGenerator for FixedIdGenerator {
    fn new_uuid(&self) -> Uuid {
        self.0
    }
}
