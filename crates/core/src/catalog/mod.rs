mod requests;
mod types;

pub use requests::{CarFields, CategoryFields, UserFields};
pub use types::{Car, CarListing, Category, DeleteConfirmation, User};
