//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.
//! These are testable in isolation without the async wrapper.

use carlot_core::catalog::{CarListing, Category, User};
use rusqlite::Row;

/// Convert a SQLite row to a User.
///
/// Expected columns: id, name, email
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

/// Convert a SQLite row to a Category.
///
/// Expected columns: id, name
pub fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Convert a row from the cars/categories LEFT JOIN to a CarListing.
///
/// Expected columns: id, marca, modelo, category_id, category_name
pub fn row_to_car_listing(row: &Row) -> rusqlite::Result<CarListing> {
    Ok(CarListing {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        category_id: row.get(3)?,
        category_name: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_to_user_with_nulls() {
        let conn = Connection::open_in_memory().unwrap();

        let user = conn
            .query_row("SELECT 5, NULL, 'a@x.com'", [], row_to_user)
            .unwrap();

        assert_eq!(
            user,
            User {
                id: 5,
                name: None,
                email: Some("a@x.com".to_string()),
            }
        );
    }

    #[test]
    fn test_row_to_category() {
        let conn = Connection::open_in_memory().unwrap();

        let category = conn
            .query_row("SELECT 10, 'SUV'", [], row_to_category)
            .unwrap();

        assert_eq!(category.id, 10);
        assert_eq!(category.name.as_deref(), Some("SUV"));
    }

    #[test]
    fn test_row_to_car_listing_without_category() {
        let conn = Connection::open_in_memory().unwrap();

        let car = conn
            .query_row("SELECT 1, 'Toyota', 'RAV4', NULL, NULL", [], row_to_car_listing)
            .unwrap();

        assert_eq!(car.make.as_deref(), Some("Toyota"));
        assert_eq!(car.model.as_deref(), Some("RAV4"));
        assert_eq!(car.category_id, None);
        assert_eq!(car.category_name, None);
    }

    #[test]
    fn test_row_to_user_rejects_text_id() {
        let conn = Connection::open_in_memory().unwrap();

        let result = conn.query_row("SELECT 'abc', 'n', 'e'", [], row_to_user);

        assert!(result.is_err());
    }
}
