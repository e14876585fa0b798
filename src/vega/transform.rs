//! Filter transforms: how a view subscribes to the shared interaction state.

use serde::Serialize;

/// Predicate for a filter transform.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Predicate {
    /// A Vega expression over `datum`; may reference params by name.
    Expr(String),
    /// The active state of a named selection.
    Param { param: String },
}

/// A `transform` entry. Only filtering is needed by the dashboards.
#[derive(Serialize, Debug, Clone)]
pub struct Transform {
    pub filter: Predicate,
}

impl Transform {
    /// Filter rows by an expression, e.g. `datum.Installs >= min_installs`.
    pub fn filter_expr(expr: impl Into<String>) -> Self {
        Self {
            filter: Predicate::Expr(expr.into()),
        }
    }

    /// Filter rows to the current state of a selection.
    pub fn filter_param(name: &str) -> Self {
        Self {
            filter: Predicate::Param {
                param: name.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expression_filter() {
        let transform = Transform::filter_expr("datum.Installs >= min_installs");
        assert_eq!(
            serde_json::to_value(&transform).unwrap(),
            json!({"filter": "datum.Installs >= min_installs"})
        );
    }

    #[test]
    fn test_param_filter() {
        let transform = Transform::filter_param("category_brush");
        assert_eq!(
            serde_json::to_value(&transform).unwrap(),
            json!({"filter": {"param": "category_brush"}})
        );
    }
}
