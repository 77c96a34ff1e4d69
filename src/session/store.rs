use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::{CredentialSets, EffectiveSession, Role, UserCredentials, WorkerCredentials};

use super::resolver;

// Storage keys, matching the existing persisted contract.
const KEY_USER_TOKEN: &str = "token";
const KEY_USER_ROLE: &str = "role";
const KEY_LOGGED_IN: &str = "isLoggedIn";
const KEY_WORKER_TOKEN: &str = "workerToken";
const KEY_WORKER_ROLE: &str = "workerRole";

// Minimal key-value surface the credential store needs from its
// backing storage. Browser hosts back this with local storage; tests
// and native hosts use MemoryStore.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

// Handle returned by subscribe; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn() + Send + Sync>;

// The persisted credential store plus the session-changed broadcast.
// Every mutator commits its storage writes first and notifies after,
// so a listener re-resolving the session always sees the new state.
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    // Reads both credential sets. Missing or malformed values read as
    // absent; nothing here errors.
    pub fn load(&self) -> CredentialSets {
        CredentialSets {
            user: UserCredentials {
                token: self.backend.get(KEY_USER_TOKEN),
                role: self.backend.get(KEY_USER_ROLE).map(Role::from),
                // Anything other than the literal "true" is treated
                // as logged out.
                logged_in: self
                    .backend
                    .get(KEY_LOGGED_IN)
                    .map(|v| v == "true")
                    .unwrap_or(false),
            },
            worker: WorkerCredentials {
                token: self.backend.get(KEY_WORKER_TOKEN),
                role: self.backend.get(KEY_WORKER_ROLE).map(Role::from),
            },
        }
    }

    pub fn effective_session(&self) -> EffectiveSession {
        resolver::resolve(&self.load())
    }

    // Credential sets are replaced wholesale on login, never patched.
    pub fn login_user(&self, token: &str, role: &Role) {
        self.backend.set(KEY_USER_TOKEN, token);
        self.backend.set(KEY_USER_ROLE, role.as_str());
        self.backend.set(KEY_LOGGED_IN, "true");
        tracing::debug!(role = %role, "user credentials stored");
        self.notify_changed();
    }

    pub fn login_worker(&self, token: &str, role: &Role) {
        self.backend.set(KEY_WORKER_TOKEN, token);
        self.backend.set(KEY_WORKER_ROLE, role.as_str());
        tracing::debug!(role = %role, "worker credentials stored");
        self.notify_changed();
    }

    pub fn logout_user(&self) {
        self.backend.remove(KEY_USER_TOKEN);
        self.backend.remove(KEY_USER_ROLE);
        self.backend.remove(KEY_LOGGED_IN);
        self.notify_changed();
    }

    pub fn logout_worker(&self) {
        self.backend.remove(KEY_WORKER_TOKEN);
        self.backend.remove(KEY_WORKER_ROLE);
        self.notify_changed();
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Box::new(listener)));
        }
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(id, _)| *id != subscription.0);
        }
    }

    // Zero-payload broadcast; receivers re-read the store themselves.
    // Public so a browser host can also bridge external storage
    // events into it.
    pub fn notify_changed(&self) {
        if let Ok(listeners) = self.listeners.lock() {
            for (_, listener) in listeners.iter() {
                listener();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_empty_store_loads_empty_sets() {
        let store = SessionStore::in_memory();
        let creds = store.load();
        assert_eq!(creds, CredentialSets::default());
        assert!(!store.effective_session().authenticated);
    }

    #[test]
    fn test_login_then_load_round_trip() {
        let store = SessionStore::in_memory();
        store.login_user("jwt-user", &Role::Commercial);

        let creds = store.load();
        assert_eq!(creds.user.token.as_deref(), Some("jwt-user"));
        assert_eq!(creds.user.role, Some(Role::Commercial));
        assert!(creds.user.logged_in);
        assert_eq!(creds.worker, WorkerCredentials::default());
    }

    #[test]
    fn test_logout_clears_only_its_own_set() {
        let store = SessionStore::in_memory();
        store.login_user("jwt-user", &Role::Individual);
        store.login_worker("jwt-worker", &Role::Worker);

        store.logout_worker();
        let creds = store.load();
        assert_eq!(creds.worker, WorkerCredentials::default());
        assert!(creds.user.is_authenticated());

        store.logout_user();
        assert_eq!(store.load(), CredentialSets::default());
    }

    #[test]
    fn test_malformed_logged_in_flag_reads_as_false() {
        let backend = Arc::new(MemoryStore::default());
        backend.set("isLoggedIn", "yes");
        backend.set("role", "individual");
        let store = SessionStore::new(backend);
        assert!(!store.load().user.logged_in);
        assert!(!store.effective_session().authenticated);
    }

    #[test]
    fn test_every_write_notifies_subscribers() {
        let store = SessionStore::in_memory();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_by_listener = seen.clone();
        let sub = store.subscribe(move || {
            seen_by_listener.fetch_add(1, Ordering::SeqCst);
        });

        store.login_user("jwt", &Role::Charity);
        store.login_worker("jwt", &Role::Worker);
        store.logout_worker();
        store.logout_user();
        assert_eq!(seen.load(Ordering::SeqCst), 4);

        store.unsubscribe(sub);
        store.login_user("jwt", &Role::Charity);
        assert_eq!(seen.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_listener_sees_committed_state() {
        // Write-then-notify ordering: a listener resolving the
        // session during the notification must see the new login.
        let backend = Arc::new(MemoryStore::default());
        let store = Arc::new(SessionStore::new(backend));
        let observed = Arc::new(Mutex::new(None));

        let store_for_listener = store.clone();
        let observed_for_listener = observed.clone();
        store.subscribe(move || {
            let session = store_for_listener.effective_session();
            *observed_for_listener.lock().unwrap() = Some(session);
        });

        store.login_worker("jwt", &Role::Worker);
        let session = observed.lock().unwrap().clone().unwrap();
        assert!(session.is_worker());
    }
}
