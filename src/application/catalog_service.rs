use crate::domain::catalog::{
    ActionFailure, ActionOutcome, FailureKind, HomePage, NewProduct, ProductForm,
    ProductFormValues, ProductsPage,
};
use crate::domain::errors::{PageError, StoreError};
use crate::domain::ports::{CatalogStore, StoreFactory};

pub const PRODUCTS_PAGE: &str = "/productos";
pub const NAME_REQUIRED: &str = "El nombre es obligatorio";

pub struct CatalogService<F> {
    factory: F,
}

impl<F: StoreFactory> CatalogService<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Landing page data. Never fails: whatever cannot be fetched is shown as
    /// an empty list.
    pub async fn load_home(&self) -> HomePage {
        let store = match self.factory.connect() {
            Ok(store) => store,
            Err(e) => {
                log::error!("Root page load error: {}", e);
                return HomePage::default();
            }
        };

        let (products, returned_products, trolleys) = tokio::join!(
            store.list_products(),
            store.list_returned_products(),
            store.list_trolleys(),
        );

        HomePage {
            products: or_empty("products", products),
            returned_products: or_empty("returned_products", returned_products),
            trolleys: or_empty("trolleys", trolleys),
        }
    }

    /// Product listing. Fetch failures are fatal here.
    pub async fn load_products(&self) -> Result<ProductsPage, PageError> {
        let store = self.factory.connect()?;
        let products = store.list_products().await.map_err(PageError::Fetch)?;
        Ok(ProductsPage { products })
    }

    /// Handle the product creation form.
    pub async fn create_product(&self, form: ProductForm) -> Result<ActionOutcome, PageError> {
        let store = self.factory.connect()?;

        let name = form.name.trim().to_string();
        let bar_code = form.bar_code.trim().to_string();
        let weight = parse_weight(&form.weight);

        let values = ProductFormValues {
            name: name.clone(),
            bar_code: bar_code.clone(),
            weight,
        };

        if name.is_empty() {
            return Ok(ActionOutcome::Failure(ActionFailure {
                kind: FailureKind::Validation,
                error: NAME_REQUIRED.to_string(),
                values,
            }));
        }

        let new_product = NewProduct {
            name,
            bar_code: (!bar_code.is_empty()).then_some(bar_code),
            weight,
        };

        match store.insert_product(&new_product).await {
            Ok(row) => {
                log::info!(
                    "Created product {:?} ({})",
                    row.id,
                    row.name().unwrap_or_default()
                );
                Ok(ActionOutcome::Redirect {
                    location: PRODUCTS_PAGE,
                })
            }
            Err(e) => {
                log::error!(
                    "Error inserting product (store status {:?}): {}",
                    e.status(),
                    e
                );
                Ok(ActionOutcome::Failure(ActionFailure {
                    kind: FailureKind::Write,
                    error: e.to_string(),
                    values,
                }))
            }
        }
    }
}

fn or_empty<T>(collection: &str, result: Result<Vec<T>, StoreError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!(
            "Error fetching {} from store (status {:?}): {}",
            collection,
            e.status(),
            e
        );
        Vec::new()
    })
}

/// Empty input is absent. Anything that is not a finite number is stored as
/// absent too.
pub fn parse_weight(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(w) if w.is_finite() => Some(w),
        _ => {
            log::warn!("Ignoring non-numeric weight '{}'", raw);
            None
        }
    }
}
