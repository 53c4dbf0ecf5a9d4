//! In-memory customer store.
//!
//! The id set is fixed when the store is built: there is no insert or
//! delete. Updates hold the write lock for the whole read-modify-write, so
//! two concurrent PATCHes to the same record apply one after the other.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::customer::{self, Customer, Field};

pub struct CustomerStore {
    customers: RwLock<BTreeMap<u64, Customer>>,
}

impl CustomerStore {
    pub fn new(customers: impl IntoIterator<Item = Customer>) -> Self {
        let customers = customers.into_iter().map(|c| (c.id, c)).collect();
        Self { customers: RwLock::new(customers) }
    }

    /// A store holding the three seed profiles.
    pub fn seeded() -> Self {
        Self::new(customer::seed())
    }

    pub async fn get(&self, id: u64) -> Option<Customer> {
        self.customers.read().await.get(&id).cloned()
    }

    pub async fn contains(&self, id: u64) -> bool {
        self.customers.read().await.contains_key(&id)
    }

    /// Applies `fields` to the record with `id` and returns the result.
    ///
    /// Every key naming a writable attribute with a string value is applied;
    /// nulls, non-strings and unknown keys are skipped. `updated_at` is
    /// refreshed whenever the record exists, even if nothing else changed.
    /// Returns `None` without touching anything when `id` is unknown.
    pub async fn update(&self, id: u64, fields: &Map<String, Value>) -> Option<Customer> {
        let mut customers = self.customers.write().await;
        let customer = customers.get_mut(&id)?;

        for (key, value) in fields {
            let (Some(field), Some(value)) = (Field::from_key(key), value.as_str()) else {
                continue;
            };
            debug!(id, field = field.as_str(), "updating customer attribute");
            customer.set(field, value.to_owned());
        }
        customer.updated_at = Utc::now();

        Some(customer.clone())
    }

    /// Snapshot of every record, keyed by id.
    pub async fn list_all(&self) -> BTreeMap<u64, Customer> {
        self.customers.read().await.clone()
    }
}

impl Default for CustomerStore {
    fn default() -> Self { Self::seeded() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn get_returns_seeded_record_or_none() {
        let store = CustomerStore::seeded();
        assert_eq!(store.get(2).await.unwrap().first_name, "Alexander");
        assert!(store.get(999).await.is_none());
        assert!(store.contains(3).await);
        assert!(!store.contains(0).await);
    }

    #[tokio::test]
    async fn update_overwrites_named_fields_and_bumps_timestamp() {
        let store = CustomerStore::seeded();
        let before = store.get(1).await.unwrap();

        let after = store.update(1, &fields(json!({ "phone_number": "+1-555-9999" }))).await.unwrap();

        assert_eq!(after.phone_number, "+1-555-9999");
        assert_eq!(after.email, before.email);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > after.created_at);
        assert_eq!(store.get(1).await.unwrap(), after);
    }

    #[tokio::test]
    async fn update_skips_nulls_unknown_keys_and_managed_columns() {
        let store = CustomerStore::seeded();
        let before = store.get(3).await.unwrap();

        let after = store
            .update(3, &fields(json!({
                "email": null,
                "nickname": "iggy",
                "id": 42,
                "created_at": "1999-01-01T00:00:00Z",
                "address": 12345,
            })))
            .await
            .unwrap();

        assert_eq!(after.id, 3);
        assert_eq!(after.email, before.email);
        assert_eq!(after.address, before.address);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn update_applies_non_updatable_attributes_too() {
        let store = CustomerStore::seeded();
        let after = store
            .update(2, &fields(json!({ "email": "alex@example.com", "first_name": "Alex" })))
            .await
            .unwrap();
        assert_eq!(after.first_name, "Alex");
        assert_eq!(after.email, "alex@example.com");
    }

    #[tokio::test]
    async fn update_of_unknown_id_changes_nothing() {
        let store = CustomerStore::seeded();
        let snapshot = store.list_all().await;
        assert!(store.update(999, &fields(json!({ "email": "x@y" }))).await.is_none());
        assert_eq!(store.list_all().await, snapshot);
    }

    #[tokio::test]
    async fn list_all_is_a_copy() {
        let store = CustomerStore::seeded();
        let mut snapshot = store.list_all().await;
        snapshot.remove(&1);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.list_all().await.len(), 3);
    }
}
