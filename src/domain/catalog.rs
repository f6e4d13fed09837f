use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Primary key as the store reports it. Tables keyed by identity columns
/// return numbers, others return text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

/// A `products` row. Only `id` is required; every other column is kept as the
/// store sent it, so one odd row never rejects the whole listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RowId,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

impl Product {
    pub fn name(&self) -> Option<&str> {
        self.columns.get("name").and_then(Value::as_str)
    }

    pub fn bar_code(&self) -> Option<&str> {
        self.columns.get("bar_code").and_then(Value::as_str)
    }

    pub fn weight(&self) -> Option<f64> {
        self.columns.get("weight").and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnedProduct {
    pub id: RowId,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trolley {
    pub id: RowId,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

impl Trolley {
    pub fn updated_at(&self) -> Option<&str> {
        self.columns.get("updated_at").and_then(Value::as_str)
    }
}

/// Raw product creation form. Missing fields arrive as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bar_code: String,
    #[serde(default)]
    pub weight: String,
}

/// Row written by the product creation form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub bar_code: Option<String>,
    pub weight: Option<f64>,
}

/// Data behind the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct HomePage {
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Product>,
    #[schema(value_type = Vec<Object>)]
    pub returned_products: Vec<ReturnedProduct>,
    #[schema(value_type = Vec<Object>)]
    pub trolleys: Vec<Trolley>,
}

/// Data behind the product listing page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductsPage {
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Product>,
}

/// Submitted form values echoed back so the form can be redisplayed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductFormValues {
    pub name: String,
    pub bar_code: String,
    pub weight: Option<f64>,
}

/// Why a form action was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input rejected before reaching the store.
    Validation,
    /// The store refused the write.
    Write,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActionFailure {
    #[serde(skip)]
    pub kind: FailureKind,
    pub error: String,
    pub values: ProductFormValues,
}

/// Result of a form action that did not hit a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// 303 See Other to `location`.
    Redirect { location: &'static str },
    Failure(ActionFailure),
}
