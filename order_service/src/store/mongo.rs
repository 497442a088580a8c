// order_service/src/store/mongo.rs

use async_trait::async_trait;
use mongodb::{
  bson::{doc, oid::ObjectId},
  Client, Collection, Database,
};
use tracing::{debug, instrument};

use super::{OrderStore, StorageError};
use crate::models::{NewOrder, Order};

pub const ORDERS_COLLECTION: &str = "order";

#[derive(Clone, Debug)]
pub struct MongoOrderStore {
  database: Database,
  orders: Collection<Order>,
}

impl MongoOrderStore {
  /// Builds a client from the connection string. The driver connects lazily,
  /// so this only fails on a malformed URI; use [`ping`](Self::ping) to check
  /// the server is actually reachable.
  pub async fn connect(uri: &str, database_name: &str) -> Result<Self, StorageError> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database(database_name);
    let orders = database.collection::<Order>(ORDERS_COLLECTION);
    Ok(Self { database, orders })
  }

  #[instrument(name = "store::ping", skip(self), fields(database = %self.database.name()))]
  pub async fn ping(&self) -> Result<(), StorageError> {
    self.database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
  }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
  #[instrument(name = "store::insert", skip(self, order))]
  async fn insert(&self, order: NewOrder) -> Result<ObjectId, StorageError> {
    let result = self.orders.clone_with_type::<NewOrder>().insert_one(&order).await?;
    let id = result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| StorageError::Backend(format!("Inserted order has a non-ObjectId _id: {}", result.inserted_id)))?;
    debug!(order_id = %id, "Order document inserted.");
    Ok(id)
  }

  #[instrument(name = "store::find_by_id", skip(self), fields(order_id = %id))]
  async fn find_by_id(&self, id: ObjectId) -> Result<Option<Order>, StorageError> {
    Ok(self.orders.find_one(doc! { "_id": id }).await?)
  }

  #[instrument(name = "store::update_status", skip(self), fields(order_id = %id))]
  async fn update_status(&self, id: ObjectId, status: &str) -> Result<u64, StorageError> {
    let result = self
      .orders
      .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
      .await?;
    debug!(
      matched = result.matched_count,
      modified = result.modified_count,
      "Order status update applied."
    );
    Ok(result.modified_count)
  }
}
