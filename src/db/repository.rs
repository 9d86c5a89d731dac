//! MongoDB repository for employee CRUD operations.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use super::{EmployeeStore, InsertReceipt};
use crate::errors::AppError;
use crate::models::Employee;

/// Stored shape of an employee: the public id doubles as the document key.
///
/// Optional fields serialize as null rather than being skipped so an update's
/// `$set` overwrites them wholesale.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub department: Option<String>,
}

impl From<&Employee> for EmployeeDocument {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
        }
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(document: EmployeeDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
            department: document.department,
        }
    }
}

/// Repository over the employee collection.
#[derive(Clone)]
pub struct MongoRepository {
    collection: Collection<EmployeeDocument>,
}

impl MongoRepository {
    pub fn new(collection: Collection<EmployeeDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl EmployeeStore for MongoRepository {
    async fn insert(&self, employee: &Employee) -> Result<InsertReceipt, AppError> {
        let result = self
            .collection
            .insert_one(EmployeeDocument::from(employee))
            .await?;

        // The inserted id is always the string key we just wrote.
        let inserted_id = result
            .inserted_id
            .as_str()
            .map(ToString::to_string)
            .unwrap_or_default();

        Ok(InsertReceipt { inserted_id })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<EmployeeDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Employee::from).collect())
    }

    async fn update_by_id(&self, id: &str, employee: &Employee) -> Result<u64, AppError> {
        let mut fields = bson::to_document(&EmployeeDocument::from(employee))?;
        // The identifier is immutable; replace only the settable fields.
        fields.remove("_id");

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;

        Ok(result.modified_count)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_keys_id_under_underscore_id() {
        let employee = Employee {
            id: "abc-123".to_string(),
            name: Some("Ana".to_string()),
            department: None,
        };

        let document = bson::to_document(&EmployeeDocument::from(&employee)).unwrap();

        assert_eq!(document.get_str("_id").unwrap(), "abc-123");
        assert!(!document.contains_key("id"));
        // Absent optionals are stored as null so $set clears them.
        assert_eq!(document.get("department"), Some(&bson::Bson::Null));
    }
}
