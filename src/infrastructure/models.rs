use serde::{Deserialize, Serialize};

use crate::domain::catalog::NewProduct;

pub const PRODUCTS: &str = "products";
pub const RETURNED_PRODUCTS: &str = "returned_products";
pub const TROLLEYS: &str = "trolleys";

/// `order=` query value understood by PostgREST, e.g. `updated_at.desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }

    pub fn to_query(self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        format!("{}.{}", self.column, direction)
    }
}

#[derive(Debug, Serialize)]
pub struct NewProductRow<'a> {
    pub name: &'a str,
    pub bar_code: Option<&'a str>,
    pub weight: Option<f64>,
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(p: &'a NewProduct) -> Self {
        Self {
            name: &p.name,
            bar_code: p.bar_code.as_deref(),
            weight: p.weight,
        }
    }
}

/// Error document returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct PostgrestErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
