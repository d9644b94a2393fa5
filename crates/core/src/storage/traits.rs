use async_trait::async_trait;

use crate::catalog::{Car, CarFields, CarListing, Category, CategoryFields, User, UserFields};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with the store-assigned id.
    async fn create_user(&self, fields: UserFields) -> Result<User>;

    /// Lists every user in store order.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Replaces the fields of an existing user.
    ///
    /// Returns the supplied fields decorated with `id`, or
    /// `RepositoryError::NotFound` when no row matched.
    async fn update_user(&self, id: i64, fields: UserFields) -> Result<User>;

    /// Deletes a user by id.
    async fn delete_user(&self, id: i64) -> Result<()>;
}

/// Repository for category operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Inserts a new category and returns it with the store-assigned id.
    async fn create_category(&self, fields: CategoryFields) -> Result<Category>;

    /// Lists every category in store order.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Replaces the name of an existing category.
    async fn update_category(&self, id: i64, fields: CategoryFields) -> Result<Category>;

    /// Deletes a category by id. Cars referencing it keep existing with
    /// their category reference cleared.
    async fn delete_category(&self, id: i64) -> Result<()>;
}

/// Repository for car operations.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Inserts a new car. Fails with `Conflict` when `category_id` does not
    /// reference an existing category.
    async fn create_car(&self, fields: CarFields) -> Result<Car>;

    /// Lists every car joined with its category name.
    async fn list_cars(&self) -> Result<Vec<CarListing>>;

    /// Replaces the fields of an existing car.
    async fn update_car(&self, id: i64, fields: CarFields) -> Result<Car>;

    /// Deletes a car by id.
    async fn delete_car(&self, id: i64) -> Result<()>;
}
