//! Runtime orchestration for the deterministic arena.
//!
//! This crate wires the combat core to storage. Consumers build a
//! [`BattleManager`] (from [`RuntimeConfig`] or the builder), register
//! combatants and run battles and tournaments through it; every finished run
//! is persisted through the repository traits.
//!
//! Modules are organized by responsibility:
//! - [`manager`] hosts the request facade and its builder
//! - [`api`] exposes errors, roles and reports
//! - [`repository`] provides storage traits with in-memory and file adapters
//! - [`config`] reads runtime settings from the environment
pub mod api;
pub mod config;
pub mod manager;
pub mod repository;

pub use api::{BattleReport, Capability, Result, Role, RuntimeError, TournamentReport};
pub use config::{IdStrategy, RuntimeConfig};
pub use manager::{BattleManager, BattleManagerBuilder};
pub use repository::{
    AdminLog, AtomicIds, CombatantStore, FileAdminLog, FileCombatantStore, FileResultStore,
    IdCounter, InMemoryAdminLog, InMemoryCombatantStore, InMemoryResultStore, RecordKind,
    RepositoryError, ResultRecord, ResultStore, StoreCountIds,
};
