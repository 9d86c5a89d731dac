//! Persistence module for MongoDB.
//!
//! The store trait is the seam between handlers and the backing collection;
//! [`MongoRepository`] is the production implementation.

mod repository;

pub use repository::*;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Client;
use serde::Serialize;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::Employee;

/// Receipt returned by a successful insert.
#[derive(Debug, Clone, Serialize)]
pub struct InsertReceipt {
    pub inserted_id: String,
}

/// Store operations over the employee collection.
///
/// Each operation is a single driver call: no transactions, no retries, no
/// per-operation timeouts.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: &Employee) -> Result<InsertReceipt, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;
    /// Returns the number of modified documents (0 or 1).
    async fn update_by_id(&self, id: &str, employee: &Employee) -> Result<u64, AppError>;
    /// Returns the number of deleted documents (0 or 1).
    async fn delete_by_id(&self, id: &str) -> Result<u64, AppError>;
    /// Returns the total number of deleted documents.
    async fn delete_all(&self) -> Result<u64, AppError>;
}

/// Connect the MongoDB client and verify connectivity with a ping.
///
/// The client is returned alongside the repository so the caller can shut it
/// down; the repository keeps its own handle to the employee collection.
pub async fn init_store(config: &Config) -> Result<(Client, MongoRepository), AppError> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;

    let database = client.database(&config.db_name);
    database.run_command(doc! { "ping": 1 }).await?;

    let collection = database.collection(&config.collection_name);
    Ok((client, MongoRepository::new(collection)))
}
