use std::future::Future;

use crate::config::ConfigError;

use super::catalog::{NewProduct, Product, ReturnedProduct, Trolley};
use super::errors::StoreError;

/// Read and write access to the catalog tables of the hosted store.
///
/// Every listing comes back in the order the store was asked for; callers do
/// not re-sort.
pub trait CatalogStore {
    /// `products`, ascending by `id`.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, StoreError>>;

    /// `returned_products`, ascending by `id`.
    fn list_returned_products(
        &self,
    ) -> impl Future<Output = Result<Vec<ReturnedProduct>, StoreError>>;

    /// `trolleys`, most recently updated first.
    fn list_trolleys(&self) -> impl Future<Output = Result<Vec<Trolley>, StoreError>>;

    /// Insert one product and return the stored row.
    fn insert_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<Product, StoreError>>;
}

/// Builds a store handle on demand. Nothing is constructed until `connect`
/// is called, so the process can start without store credentials.
pub trait StoreFactory: Send + Sync + 'static {
    type Store: CatalogStore;

    fn connect(&self) -> Result<Self::Store, ConfigError>;
}
