//! Store boundary for content queries

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Named parameters bound to a query's `$name` placeholders.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, Value)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a parameter. Accepts anything that converts into a JSON value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read access to the structured-document store.
///
/// One method: a query plus named parameters in, the raw JSON result out.
/// The repository is generic over this trait so tests can substitute an
/// in-memory store for the HTTP client.
///
/// # Example
///
/// ```rust,ignore
/// struct CannedStore(Value);
///
/// #[async_trait]
/// impl ContentStore for CannedStore {
///     async fn query(&self, _query: &str, _params: &QueryParams) -> Result<Value> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Run a query against the store and return the decoded result value.
    ///
    /// A query that matches nothing returns `Value::Null` (single-document
    /// queries) or an empty array (collection queries), not an error.
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_bind_in_order() {
        let params = QueryParams::new().set("slug", "first").set("currentOrder", 3);
        let bound: Vec<(&str, &Value)> = params.iter().collect();
        assert_eq!(bound.len(), 2);
        assert_eq!(bound[0], ("slug", &json!("first")));
        assert_eq!(bound[1], ("currentOrder", &json!(3)));
    }

    #[test]
    fn get_finds_bound_value() {
        let params = QueryParams::new().set("slug", "first");
        assert_eq!(params.get("slug"), Some(&json!("first")));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn new_params_are_empty() {
        assert!(QueryParams::new().is_empty());
    }
}
