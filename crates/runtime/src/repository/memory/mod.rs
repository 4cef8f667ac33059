//! In-memory repository implementations for tests and single-process use.

mod admin;
mod combatants;
mod results;

pub use admin::InMemoryAdminLog;
pub use combatants::InMemoryCombatantStore;
pub use results::InMemoryResultStore;
