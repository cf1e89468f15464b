/// Document service interface
pub mod documents;
/// Indices service interface
pub mod indices;

pub use documents::*;
pub use indices::*;
