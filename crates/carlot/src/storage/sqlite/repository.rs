//! SQLite repository implementation.
//!
//! Implements the repository traits from `carlot_core::storage` using SQLite.
//! Every operation is exactly one SQL statement.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use carlot_core::catalog::{Car, CarFields, CarListing, Category, CategoryFields, User, UserFields};
use carlot_core::storage::{
    CarRepository, CategoryRepository, EntityKind, RepositoryError, Result, UserRepository,
};

use super::conversions::{row_to_car_listing, row_to_category, row_to_user};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Turns an affected-row count into the not-found signal for id-scoped writes.
fn require_affected(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
///
/// Owns the single connection to the database file. The connection runs on
/// a dedicated background thread, so SQLite serializes writes on its own.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Enable foreign keys and create any missing tables.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(&self, fields: UserFields) -> Result<User> {
        let name = fields.name.clone();
        let email = fields.email.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_USER, rusqlite::params![name, email])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, EntityKind::User))?;

        Ok(fields.into_user(id))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_USERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_user).map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, EntityKind::User))
    }

    async fn update_user(&self, id: i64, fields: UserFields) -> Result<User> {
        let name = fields.name.clone();
        let email = fields.email.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_USER, rusqlite::params![id, name, email])
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EntityKind::User, id))?;

        Ok(fields.into_user(id))
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_USER, [id])
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EntityKind::User, id))
    }
}

// ============================================================================
// CategoryRepository implementation
// ============================================================================

#[async_trait]
impl CategoryRepository for SqliteRepository {
    async fn create_category(&self, fields: CategoryFields) -> Result<Category> {
        let name = fields.name.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_CATEGORY, rusqlite::params![name])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, EntityKind::Category))?;

        Ok(fields.into_category(id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CATEGORIES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_category).map_err(wrap_err)?;

                let mut categories = Vec::new();
                for row_result in rows {
                    categories.push(row_result.map_err(wrap_err)?);
                }
                Ok(categories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, EntityKind::Category))
    }

    async fn update_category(&self, id: i64, fields: CategoryFields) -> Result<Category> {
        let name = fields.name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_CATEGORY, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EntityKind::Category, id))?;

        Ok(fields.into_category(id))
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CATEGORY, [id])
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EntityKind::Category, id))
    }
}

// ============================================================================
// CarRepository implementation
// ============================================================================

#[async_trait]
impl CarRepository for SqliteRepository {
    async fn create_car(&self, fields: CarFields) -> Result<Car> {
        let make = fields.make.clone();
        let model = fields.model.clone();
        let category_id = fields.category_id;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CAR,
                    rusqlite::params![make, model, category_id],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, EntityKind::Car))?;

        Ok(fields.into_car(id))
    }

    async fn list_cars(&self) -> Result<Vec<CarListing>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CARS_WITH_CATEGORY)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_car_listing).map_err(wrap_err)?;

                let mut cars = Vec::new();
                for row_result in rows {
                    cars.push(row_result.map_err(wrap_err)?);
                }
                Ok(cars)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, EntityKind::Car))
    }

    async fn update_car(&self, id: i64, fields: CarFields) -> Result<Car> {
        let make = fields.make.clone();
        let model = fields.model.clone();
        let category_id = fields.category_id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_CAR,
                        rusqlite::params![id, make, model, category_id],
                    )
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EntityKind::Car, id))?;

        Ok(fields.into_car(id))
    }

    async fn delete_car(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_CAR, [id]).map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EntityKind::Car, id))
    }
}
