use serde::{Deserialize, Serialize};

// Pickup request lifecycle as the backend reports it. Paid and free
// pickups enter through different initial states; from there a field
// worker drives the request along the forward chain. Serde renames
// match the wire strings exactly, including the legacy
// "Paid - Pending Pickup" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "Paid - Pending Pickup")]
    PaidPendingPickup,
    #[serde(rename = "ASSIGNED")]
    Assigned,
    #[serde(rename = "REACHED")]
    Reached,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "RECYCLED")]
    Recycled,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl PickupStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PickupStatus::Recycled | PickupStatus::Cancelled)
    }

    // Legal forward chain: (PENDING | Paid - Pending Pickup) ->
    // ASSIGNED -> REACHED -> COMPLETED -> RECYCLED. Cancellation is
    // allowed from any non-terminal state.
    pub fn can_transition_to(&self, next: &PickupStatus) -> bool {
        use PickupStatus::*;
        match (self, next) {
            (Pending | PaidPendingPickup, Assigned) => true,
            (Assigned, Reached) => true,
            (Reached, Completed) => true,
            (Completed, Recycled) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}
