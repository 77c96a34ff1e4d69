use chrono::NaiveDate;

use crate::capacity::DailyPickupCounts;
use crate::config::PaymentConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{PickupStatus, Role, ScheduleForm};

// Submission flow around the capacity guard: validate the form,
// re-check the date against the latest known counts, branch on
// payment, then apply the backend's verdict to the local cache.

// Runs before the schedule request (and before payment is invoked).
// Returns the pickup date on success so callers do not re-read the
// form.
pub fn precheck(form: &ScheduleForm, counts: &DailyPickupCounts) -> AppResult<NaiveDate> {
    let date = form.validate()?;
    counts.check_date(date)?;
    Ok(date)
}

// Charity pickups are free; every other role pays the fixed charge
// before the request is submitted.
pub fn requires_payment(role: &Role) -> bool {
    *role != Role::Charity
}

pub fn payment_due(role: &Role, payment: &PaymentConfig) -> Option<u32> {
    requires_payment(role).then_some(payment.pickup_price_rupees)
}

// Initial status sent with the request, mirroring the payment branch.
pub fn submission_status(role: &Role) -> PickupStatus {
    if requires_payment(role) {
        PickupStatus::PaidPendingPickup
    } else {
        PickupStatus::Pending
    }
}

// The backend's verdict on a schedule request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleResponse {
    Confirmed,
    // Date filled up between our pre-check and the write.
    DateFull,
    Failed(String),
}

// Applies the backend's verdict. A confirmation bumps the local count
// so a second attempt this session sees it; a DateFull rejection is
// authoritative even though our own pre-check passed.
pub fn apply_response(
    counts: &mut DailyPickupCounts,
    date: NaiveDate,
    response: ScheduleResponse,
) -> AppResult<()> {
    match response {
        ScheduleResponse::Confirmed => {
            counts.record_scheduled(date);
            tracing::info!(%date, "pickup scheduled");
            Ok(())
        }
        ScheduleResponse::DateFull => {
            tracing::warn!(%date, "backend rejected schedule: date fully booked");
            Err(AppError::DateFull(date))
        }
        ScheduleResponse::Failed(message) => Err(AppError::Backend(message)),
    }
}
