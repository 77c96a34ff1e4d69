pub mod models;
pub mod session;
pub mod access;
pub mod capacity;
pub mod schedule;
pub mod api;
pub mod config;
pub mod errors;

pub use access::{authorize, AccessDecision};
pub use capacity::{DailyPickupCounts, MAX_PICKUPS_PER_DAY};
pub use errors::{AppError, AppResult};
pub use models::{CredentialSets, EffectiveSession, Role};
pub use session::{resolve, MemoryStore, SessionStore};
