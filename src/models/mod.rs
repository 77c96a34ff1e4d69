mod credentials;
mod forms;
mod pickup;
mod role;
mod session;

pub use credentials::{CredentialSets, UserCredentials, WorkerCredentials};
pub use forms::ScheduleForm;
pub use pickup::PickupStatus;
pub use role::Role;
pub use session::EffectiveSession;
