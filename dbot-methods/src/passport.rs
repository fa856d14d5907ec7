//! Telegram Passport error reporting.

use dbot_types::{PassportElementError};
use serde::Serialize;

use crate::request::impl_request;

/// Tells the user some passport elements contain errors; they must resubmit before the errors
/// are resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetPassportDataErrors {
    pub user_id: i64,
    pub errors: Vec<PassportElementError>,
}

impl SetPassportDataErrors {
    pub fn new(user_id: i64, errors: Vec<PassportElementError>) -> Self {
        Self {
            user_id,
            errors,
        }
    }
}

impl_request! {
    SetPassportDataErrors => "setPassportDataErrors", bool;
}
