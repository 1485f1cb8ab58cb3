#[macro_use]
extern crate serde_derive;

use crate::error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;
pub const JSON_API_HEADER: &str = "application/vnd.api+json";

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod request;
pub mod response;
