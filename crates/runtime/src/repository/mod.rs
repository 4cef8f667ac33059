//! Repository layer for everything a request persists.
//!
//! - Combatant definitions and their cumulative counters
//! - Finished battle and tournament records
//! - The admin log
//! - Battle and tournament id issuance
//!
//! Each concern sits behind a trait with an in-memory and a file-backed
//! implementation.

mod error;
mod file;
mod ids;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileAdminLog, FileCombatantStore, FileResultStore};
pub use ids::{AtomicIds, StoreCountIds};
pub use memory::{InMemoryAdminLog, InMemoryCombatantStore, InMemoryResultStore};
pub use traits::{AdminLog, CombatantStore, IdCounter, ResultStore};
pub use types::{RecordKind, ResultRecord};
