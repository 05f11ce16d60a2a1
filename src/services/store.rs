use async_trait::async_trait;
use mongodb::bson::{doc, to_bson};

use crate::error::AppError;
use crate::models::{Reading, UserRecord};
use crate::services::MongoDb;

/// The record store the handlers depend on. One record per email; readings
/// are append-only. Kept as a trait so the persistence backend is an
/// injected collaborator rather than an ambient global.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    async fn create_user(&self, record: &UserRecord) -> Result<(), AppError>;

    /// Appends a reading to an existing record. Returns `false` when no
    /// record matched the email, so the caller can create one instead.
    async fn append_reading(&self, email: &str, reading: &Reading) -> Result<bool, AppError>;
}

#[async_trait]
impl RecordStore for MongoDb {
    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let record = self
            .users()
            .find_one(doc! { "_id": email }, None)
            .await
            .map_err(AppError::from)?;
        Ok(record)
    }

    async fn create_user(&self, record: &UserRecord) -> Result<(), AppError> {
        self.users()
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert user record {}: {}", record.email, e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn append_reading(&self, email: &str, reading: &Reading) -> Result<bool, AppError> {
        let reading_bson = to_bson(reading).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize reading: {}", e))
        })?;

        let result = self
            .users()
            .update_one(
                doc! { "_id": email },
                doc! { "$push": { "readings": reading_bson } },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to append reading for {}: {}", email, e);
                AppError::from(e)
            })?;

        Ok(result.matched_count > 0)
    }
}
