//! Coffee order storage module for `DynamoDB` operations

mod error;

use std::sync::Arc;

use aws_sdk_dynamodb::{error::SdkError, types::AttributeValue, Client as DynamoDbClient};
pub use error::{OrderStorageError, OrderStorageResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_dynamo::{from_items, to_item};
use strum::Display;

/// Status assigned to every newly created order
///
/// Status is otherwise free-form text; any string is accepted on update.
pub const PENDING_STATUS: &str = "Pending";

/// `DynamoDB` attribute names for the coffee orders table
#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "PascalCase")]
pub enum OrderAttribute {
    /// Partition key - unique order ID (UUID v4)
    OrderId,
    /// Sort key - name of the ordering customer
    CustomerName,
    /// Coffee blend ordered
    CoffeeBlend,
    /// Free-form order status
    OrderStatus,
}

/// A coffee order as stored in `DynamoDB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Partition key - unique order ID
    pub order_id: String,
    /// Sort key - customer name
    pub customer_name: String,
    /// Coffee blend, fixed at creation
    pub coffee_blend: String,
    /// Current status of the order
    pub order_status: String,
}

impl Order {
    /// Builds a new pending order with a freshly generated UUID v4 identifier
    #[must_use]
    pub fn new_pending(customer_name: String, coffee_blend: String) -> Self {
        Self {
            order_id: uuid::Uuid::new_v4().to_string(),
            customer_name,
            coffee_blend,
            order_status: PENDING_STATUS.to_string(),
        }
    }
}

/// Composite key addressing a single order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderKey {
    /// Order ID (partition key)
    pub order_id: String,
    /// Customer name (sort key)
    pub customer_name: String,
}

impl OrderKey {
    /// Creates a new composite key
    #[must_use]
    pub const fn new(order_id: String, customer_name: String) -> Self {
        Self {
            order_id,
            customer_name,
        }
    }

    fn to_key_attributes(&self) -> [(String, AttributeValue); 2] {
        [
            (
                OrderAttribute::OrderId.to_string(),
                AttributeValue::S(self.order_id.clone()),
            ),
            (
                OrderAttribute::CustomerName.to_string(),
                AttributeValue::S(self.customer_name.clone()),
            ),
        ]
    }
}

/// Document store primitives used by the order handlers
#[async_trait::async_trait]
pub trait OrderStore: Send + Sync {
    /// Writes a full order, overwriting any existing record with the same key
    async fn put(&self, order: &Order) -> OrderStorageResult<()>;

    /// Returns every stored record as-is, including attributes `Order` does not model
    async fn scan(&self) -> OrderStorageResult<Vec<Value>>;

    /// Sets the status of an existing order
    ///
    /// Fails with [`OrderStorageError::OrderNotFound`] when no record matches `key`.
    async fn update_status(&self, key: &OrderKey, new_status: &str) -> OrderStorageResult<()>;

    /// Removes an order; removing a missing order is not an error
    async fn delete(&self, key: &OrderKey) -> OrderStorageResult<()>;
}

/// Storage client for coffee orders backed by `DynamoDB`
pub struct OrderStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl OrderStorage {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for coffee orders
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }
}

#[async_trait::async_trait]
impl OrderStore for OrderStorage {
    /// # Errors
    ///
    /// Returns `OrderStorageError` if serialization or the `DynamoDB` put operation fails
    async fn put(&self, order: &Order) -> OrderStorageResult<()> {
        let item = to_item(order)?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        tracing::debug!(order_id = %order.order_id, table = %self.table_name, "order written");
        Ok(())
    }

    /// Only the first page of the scan is returned; `LastEvaluatedKey` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `OrderStorageError` if the `DynamoDB` scan operation fails
    async fn scan(&self) -> OrderStorageResult<Vec<Value>> {
        let response = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await?;

        if response.last_evaluated_key().is_some() {
            tracing::warn!(table = %self.table_name, "scan truncated to first page");
        }

        let items = response.items.unwrap_or_default();
        Ok(from_items(items)?)
    }

    /// # Errors
    ///
    /// Returns `OrderStorageError::OrderNotFound` if the key does not exist, or another
    /// `OrderStorageError` if the `DynamoDB` update operation fails
    async fn update_status(&self, key: &OrderKey, new_status: &str) -> OrderStorageResult<()> {
        let [pk, sk] = key.to_key_attributes();

        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(pk.0, pk.1)
            .key(sk.0, sk.1)
            .update_expression("SET #status = :status")
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#status", OrderAttribute::OrderStatus.to_string())
            .expression_attribute_names("#pk", OrderAttribute::OrderId.to_string())
            .expression_attribute_values(":status", AttributeValue::S(new_status.to_string()))
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    OrderStorageError::OrderNotFound {
                        order_id: key.order_id.clone(),
                        customer_name: key.customer_name.clone(),
                    }
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns `OrderStorageError` if the `DynamoDB` delete operation fails
    async fn delete(&self, key: &OrderKey) -> OrderStorageResult<()> {
        let [pk, sk] = key.to_key_attributes();

        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(pk.0, pk.1)
            .key(sk.0, sk.1)
            .send()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_with_table_attribute_names() {
        let order = Order {
            order_id: "order-1".to_string(),
            customer_name: "Ada".to_string(),
            coffee_blend: "Ethiopian Yirgacheffe".to_string(),
            order_status: PENDING_STATUS.to_string(),
        };

        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json[OrderAttribute::OrderId.to_string()], "order-1");
        assert_eq!(json[OrderAttribute::CustomerName.to_string()], "Ada");
        assert_eq!(
            json[OrderAttribute::CoffeeBlend.to_string()],
            "Ethiopian Yirgacheffe"
        );
        assert_eq!(json[OrderAttribute::OrderStatus.to_string()], "Pending");
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(OrderAttribute::OrderId.to_string(), "OrderId");
        assert_eq!(OrderAttribute::CustomerName.to_string(), "CustomerName");
        assert_eq!(OrderAttribute::CoffeeBlend.to_string(), "CoffeeBlend");
        assert_eq!(OrderAttribute::OrderStatus.to_string(), "OrderStatus");
    }

    #[test]
    fn test_new_pending_generates_unique_ids() {
        let first = Order::new_pending("Ada".to_string(), "House".to_string());
        let second = Order::new_pending("Ada".to_string(), "House".to_string());

        assert_eq!(first.order_status, "Pending");
        assert!(!first.order_id.is_empty());
        assert_ne!(first.order_id, second.order_id);
    }

    #[test]
    fn test_order_dynamo_item_round_trip() {
        let order = Order::new_pending("Grace".to_string(), "Sumatra".to_string());

        let item: std::collections::HashMap<String, AttributeValue> = to_item(&order).unwrap();
        assert_eq!(
            item.get("OrderStatus"),
            Some(&AttributeValue::S("Pending".to_string()))
        );

        let parsed: Order = serde_dynamo::from_item(item).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn test_raw_items_keep_unknown_and_missing_attributes() {
        let mut annotated: std::collections::HashMap<String, AttributeValue> =
            to_item(&Order::new_pending("Ada".to_string(), "House".to_string())).unwrap();
        annotated.insert("Notes".to_string(), AttributeValue::S("oat milk".to_string()));

        let partial = std::collections::HashMap::from([
            ("OrderId".to_string(), AttributeValue::S("o-2".to_string())),
            ("CustomerName".to_string(), AttributeValue::S("Grace".to_string())),
            ("OrderStatus".to_string(), AttributeValue::S("Brewing".to_string())),
        ]);

        let records: Vec<Value> = from_items(vec![annotated, partial]).unwrap();

        assert_eq!(records[0]["Notes"], "oat milk");
        assert_eq!(records[0]["OrderStatus"], "Pending");
        assert_eq!(
            records[1],
            serde_json::json!({
                "OrderId": "o-2",
                "CustomerName": "Grace",
                "OrderStatus": "Brewing"
            })
        );
    }

    #[test]
    fn test_key_attributes_cover_composite_key() {
        let key = OrderKey::new("order-1".to_string(), "Ada".to_string());
        let [pk, sk] = key.to_key_attributes();

        assert_eq!(pk, ("OrderId".to_string(), AttributeValue::S("order-1".to_string())));
        assert_eq!(sk, ("CustomerName".to_string(), AttributeValue::S("Ada".to_string())));
    }
}
