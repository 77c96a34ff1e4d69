mod resolver;
mod store;

pub use resolver::resolve;
pub use store::{KeyValueStore, MemoryStore, SessionStore, Subscription};
