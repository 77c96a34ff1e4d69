use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

// Pickup scheduling form. City and state are filled from the pincode
// lookup, the image travels as a separate multipart attachment; the
// form only tracks whether one was attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleForm {
    pub user_id: String,
    pub date: Option<NaiveDate>,
    pub time_slot: String,
    pub address: String,
    pub pincode: String,
    pub city: String,
    pub state: String,
    pub scheduler_name: String,
    pub phone: String,
    pub email: String,
    pub waste_type: String,
    pub has_image: bool,
}

impl ScheduleForm {
    // Presence and format checks performed before anything is sent
    // (or payment invoked). Returns the first failure only, the way
    // the original form surfaced one message at a time.
    pub fn validate(&self) -> AppResult<NaiveDate> {
        if !self.has_image {
            return Err(AppError::Validation(
                "Please upload an image of the item.".to_string(),
            ));
        }
        if self.pincode.len() != 6 || !self.pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::Validation("Pincode must be 6 digits.".to_string()));
        }
        let all_present = !self.time_slot.is_empty()
            && !self.address.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.scheduler_name.is_empty()
            && !self.phone.is_empty()
            && !self.email.is_empty()
            && !self.waste_type.is_empty();
        match self.date {
            Some(date) if all_present => Ok(date),
            _ => Err(AppError::Validation(
                "Please fill in all required fields and upload an image before proceeding."
                    .to_string(),
            )),
        }
    }
}
