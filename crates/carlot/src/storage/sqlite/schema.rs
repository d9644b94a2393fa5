//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// Enables foreign key enforcement. SQLite keeps it off per connection by
/// default, and `ON DELETE SET NULL` on `cars` depends on it.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT
);

-- Categories table
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT
);

-- Cars table
CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    marca TEXT,
    modelo TEXT,
    category_id INTEGER,
    FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE SET NULL
);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (name, email)
VALUES (?1, ?2)
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, name, email
FROM users
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET name = ?2, email = ?3
WHERE id = ?1
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM users
WHERE id = ?1
"#;

// Category queries
pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categories (name)
VALUES (?1)
"#;

pub const SELECT_CATEGORIES: &str = r#"
SELECT id, name
FROM categories
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categories
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_CATEGORY: &str = r#"
DELETE FROM categories
WHERE id = ?1
"#;

// Car queries
pub const INSERT_CAR: &str = r#"
INSERT INTO cars (marca, modelo, category_id)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_CARS_WITH_CATEGORY: &str = r#"
SELECT cars.id, cars.marca, cars.modelo, cars.category_id, categories.name AS category_name
FROM cars
LEFT JOIN categories ON cars.category_id = categories.id
"#;

pub const UPDATE_CAR: &str = r#"
UPDATE cars
SET marca = ?2, modelo = ?3, category_id = ?4
WHERE id = ?1
"#;

pub const DELETE_CAR: &str = r#"
DELETE FROM cars
WHERE id = ?1
"#;
