//! Interaction parameters: selections and slider-bound variables.

use serde::Serialize;
use serde_json::Value;

/// What a selection captures.
#[derive(Serialize, Debug, Clone)]
pub struct SelectionDef {
    #[serde(rename = "type")]
    pub select_type: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub encodings: Vec<String>,
}

/// Range-slider input binding for a variable parameter.
#[derive(Serialize, Debug, Clone)]
pub struct RangeBinding {
    pub input: &'static str,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub name: String,
}

/// A view-level interaction parameter.
///
/// Attached to the views that own the interaction; other views reference it
/// by name through filter transforms.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Param {
    Selection {
        name: String,
        select: SelectionDef,
        #[serde(skip_serializing_if = "Option::is_none")]
        bind: Option<&'static str>,
    },
    Variable {
        name: String,
        value: Value,
        bind: RangeBinding,
    },
}

impl Param {
    /// Point selection over a field, driven by legend clicks.
    pub fn legend_point(name: &str, field: &str) -> Self {
        Param::Selection {
            name: name.to_string(),
            select: SelectionDef {
                select_type: "point",
                fields: vec![field.to_string()],
                encodings: Vec::new(),
            },
            bind: Some("legend"),
        }
    }

    /// Interval selection over the x encoding (a horizontal brush).
    pub fn x_brush(name: &str) -> Self {
        Param::Selection {
            name: name.to_string(),
            select: SelectionDef {
                select_type: "interval",
                fields: Vec::new(),
                encodings: vec!["x".to_string()],
            },
            bind: None,
        }
    }

    /// Numeric parameter bound to a labeled range slider.
    pub fn range_slider(name: &str, value: i64, min: i64, max: i64, step: i64, label: &str) -> Self {
        Param::Variable {
            name: name.to_string(),
            value: value.into(),
            bind: RangeBinding {
                input: "range",
                min,
                max,
                step,
                name: label.to_string(),
            },
        }
    }

    /// The name other views use to reference this parameter.
    pub fn name(&self) -> &str {
        match self {
            Param::Selection { name, .. } | Param::Variable { name, .. } => name,
        }
    }
}
