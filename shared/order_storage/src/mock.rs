//! In-memory order stores for exercising handlers without `DynamoDB`

use std::collections::BTreeMap;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::order::{
    Order, OrderAttribute, OrderKey, OrderStorageError, OrderStorageResult, OrderStore,
};

/// Order store keeping raw records in memory, keyed by (`OrderId`, `CustomerName`)
#[derive(Default)]
pub struct InMemoryOrderStore {
    records: RwLock<BTreeMap<(String, String), Value>>,
}

impl InMemoryOrderStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record as-is, the way another writer to the table could
    ///
    /// # Errors
    ///
    /// Returns `OrderStorageError::SerializationError` if `record` lacks a string
    /// `OrderId` or `CustomerName`
    pub async fn insert_raw(&self, record: Value) -> OrderStorageResult<()> {
        let key_part = |attribute: OrderAttribute| {
            record[attribute.to_string()]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| {
                    OrderStorageError::SerializationError(format!("missing key attribute {attribute}"))
                })
        };
        let key = (
            key_part(OrderAttribute::OrderId)?,
            key_part(OrderAttribute::CustomerName)?,
        );

        self.records.write().await.insert(key, record);
        Ok(())
    }

    /// Looks up a single record by its composite key
    pub async fn get(&self, key: &OrderKey) -> Option<Value> {
        self.records
            .read()
            .await
            .get(&(key.order_id.clone(), key.customer_name.clone()))
            .cloned()
    }
}

#[async_trait::async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn put(&self, order: &Order) -> OrderStorageResult<()> {
        let record = serde_json::to_value(order)
            .map_err(|e| OrderStorageError::SerializationError(e.to_string()))?;
        self.insert_raw(record).await
    }

    async fn scan(&self) -> OrderStorageResult<Vec<Value>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn update_status(&self, key: &OrderKey, new_status: &str) -> OrderStorageResult<()> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(&(key.order_id.clone(), key.customer_name.clone()))
        else {
            return Err(OrderStorageError::OrderNotFound {
                order_id: key.order_id.clone(),
                customer_name: key.customer_name.clone(),
            });
        };
        record[OrderAttribute::OrderStatus.to_string()] = Value::String(new_status.to_string());
        Ok(())
    }

    async fn delete(&self, key: &OrderKey) -> OrderStorageResult<()> {
        self.records
            .write()
            .await
            .remove(&(key.order_id.clone(), key.customer_name.clone()));
        Ok(())
    }
}

/// Order store whose every operation fails with the configured message
pub struct FailingOrderStore {
    message: String,
}

impl FailingOrderStore {
    /// Creates a store that rejects every call with `message`
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn failure(&self) -> OrderStorageError {
        OrderStorageError::Unavailable(self.message.clone())
    }
}

#[async_trait::async_trait]
impl OrderStore for FailingOrderStore {
    async fn put(&self, _order: &Order) -> OrderStorageResult<()> {
        Err(self.failure())
    }

    async fn scan(&self) -> OrderStorageResult<Vec<Value>> {
        Err(self.failure())
    }

    async fn update_status(&self, _key: &OrderKey, _new_status: &str) -> OrderStorageResult<()> {
        Err(self.failure())
    }

    async fn delete(&self, _key: &OrderKey) -> OrderStorageResult<()> {
        Err(self.failure())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_update_missing_order_is_not_found() {
        let store = InMemoryOrderStore::new();
        let key = OrderKey::new("missing".to_string(), "Ada".to_string());

        let result = store.update_status(&key, "Brewing").await;

        assert!(matches!(
            result,
            Err(OrderStorageError::OrderNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_other_attributes() {
        let store = InMemoryOrderStore::new();
        store
            .insert_raw(json!({
                "OrderId": "o-1",
                "CustomerName": "Ada",
                "CoffeeBlend": "House",
                "OrderStatus": "Pending",
                "Notes": "extra hot"
            }))
            .await
            .unwrap();

        let key = OrderKey::new("o-1".to_string(), "Ada".to_string());
        store.update_status(&key, "Ready").await.unwrap();

        let updated = store.get(&key).await.unwrap();
        assert_eq!(updated["OrderStatus"], "Ready");
        assert_eq!(updated["CoffeeBlend"], "House");
        assert_eq!(updated["Notes"], "extra hot");
    }

    #[tokio::test]
    async fn test_insert_raw_requires_key_attributes() {
        let store = InMemoryOrderStore::new();

        let result = store.insert_raw(json!({ "OrderId": "o-1" })).await;

        assert!(matches!(
            result,
            Err(OrderStorageError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_failing_store_reports_message() {
        let store = FailingOrderStore::new("connection refused");

        let err = store.scan().await.unwrap_err();

        assert!(err.to_string().contains("connection refused"));
    }
}
