//! In-memory store doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use serde_json::{json, Map, Value};

use crate::config::{ConfigError, SUPABASE_SERVICE_ROLE_KEY, SUPABASE_URL};
use crate::domain::catalog::{NewProduct, Product, ReturnedProduct, RowId, Trolley};
use crate::domain::errors::StoreError;
use crate::domain::ports::{CatalogStore, StoreFactory};

pub fn product(id: i64, name: &str) -> Product {
    let mut columns = Map::new();
    columns.insert("name".to_string(), Value::from(name));
    Product {
        id: RowId::Number(id),
        columns,
    }
}

pub fn returned(id: i64) -> ReturnedProduct {
    ReturnedProduct {
        id: RowId::Number(id),
        columns: Map::new(),
    }
}

pub fn trolley(id: &str, updated_at: &str) -> Trolley {
    let mut columns = Map::new();
    columns.insert("updated_at".to_string(), Value::from(updated_at));
    Trolley {
        id: RowId::Text(id.to_string()),
        columns,
    }
}

fn api_error(message: &str) -> StoreError {
    StoreError::Api {
        status: 500,
        message: message.to_string(),
    }
}

/// Canned responses; `Some(message)` in a `fail_*` field makes that call fail.
#[derive(Debug, Default)]
pub struct FakeState {
    pub products: Vec<Product>,
    pub returned_products: Vec<ReturnedProduct>,
    pub trolleys: Vec<Trolley>,
    pub fail_products: Option<String>,
    pub fail_returned: Option<String>,
    pub fail_trolleys: Option<String>,
    pub fail_insert: Option<String>,
    pub inserted: Vec<NewProduct>,
    pub connects: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<FakeState>>,
}

impl CatalogStore for FakeStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let state = self.state.lock().unwrap();
        match &state.fail_products {
            Some(msg) => Err(api_error(msg)),
            None => Ok(state.products.clone()),
        }
    }

    async fn list_returned_products(&self) -> Result<Vec<ReturnedProduct>, StoreError> {
        let state = self.state.lock().unwrap();
        match &state.fail_returned {
            Some(msg) => Err(api_error(msg)),
            None => Ok(state.returned_products.clone()),
        }
    }

    async fn list_trolleys(&self) -> Result<Vec<Trolley>, StoreError> {
        let state = self.state.lock().unwrap();
        match &state.fail_trolleys {
            Some(msg) => Err(api_error(msg)),
            None => Ok(state.trolleys.clone()),
        }
    }

    async fn insert_product(&self, new: &NewProduct) -> Result<Product, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.inserted.push(new.clone());
        if let Some(msg) = &state.fail_insert {
            return Err(api_error(msg));
        }
        let id = state.products.len() as i64 + 1;
        let columns = match json!({
            "name": new.name,
            "bar_code": new.bar_code,
            "weight": new.weight,
        }) {
            Value::Object(columns) => columns,
            _ => Map::new(),
        };
        let row = Product {
            id: RowId::Number(id),
            columns,
        };
        state.products.push(row.clone());
        Ok(row)
    }
}

/// Factory over a shared [`FakeStore`]; `missing_config` simulates absent
/// credentials.
#[derive(Debug, Clone, Default)]
pub struct FakeFactory {
    pub store: FakeStore,
    pub missing_config: bool,
}

impl FakeFactory {
    pub fn with_state(state: FakeState) -> Self {
        Self {
            store: FakeStore {
                state: Arc::new(Mutex::new(state)),
            },
            missing_config: false,
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            missing_config: true,
            ..Self::default()
        }
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.store.state.lock().unwrap()
    }
}

impl StoreFactory for FakeFactory {
    type Store = FakeStore;

    fn connect(&self) -> Result<FakeStore, ConfigError> {
        if self.missing_config {
            return Err(ConfigError::MissingEnvVars(vec![
                SUPABASE_URL,
                SUPABASE_SERVICE_ROLE_KEY,
            ]));
        }
        self.state().connects += 1;
        Ok(self.store.clone())
    }
}
