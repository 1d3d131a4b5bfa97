use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid rating: {value} {location}")]
    InvalidRating {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown chat exchange: {id} {location}")]
    UnknownExchange { id: String, location: ErrorLocation },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
