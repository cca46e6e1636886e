use crate::errors::ApiError;
use std::ops::RangeInclusive;

pub const SUCCESS_STATUS: RangeInclusive<u16> = 200..=299;

pub fn validate_status(status_code: u16) -> Result<(), ApiError> {
    if SUCCESS_STATUS.contains(&status_code) {
        Ok(())
    } else {
        Err(ApiError::Server { status_code })
    }
}
