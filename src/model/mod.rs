pub mod document;
pub mod error;
pub mod relationship;
pub mod resource;

pub type Id = String;
