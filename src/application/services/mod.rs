/// Module containing the document service implementation
pub mod document_service;
/// Module containing the indices service implementation
pub mod indices_service;

pub use crate::application::interfaces::documents::*;
pub use crate::application::interfaces::indices::*;
pub use document_service::*;
pub use indices_service::*;
