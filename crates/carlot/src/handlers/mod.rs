pub mod cars;
pub mod categories;
pub mod error;
pub mod extract;
pub mod root;
pub mod users;

pub use error::AppError;
pub use extract::LenientJson;
