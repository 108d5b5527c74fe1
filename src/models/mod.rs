pub mod city;
pub mod doctor;
pub mod enums;
pub mod filters;
pub mod form;
pub mod specialty;

pub use city::*;
pub use doctor::*;
pub use enums::*;
pub use filters::*;
pub use form::*;
pub use specialty::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: String, value: String },
}
