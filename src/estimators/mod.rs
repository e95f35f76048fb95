pub mod complexity;
pub mod error;
pub mod traits;
pub mod approaches;
pub mod utils;

pub use error::ComplexityError;
pub use traits::GlobalValue;
