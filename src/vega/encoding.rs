//! Encoding channels: field references, conditions and their options.

use serde::Serialize;
use serde_json::Value;

/// Vega-Lite measurement type for a field.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Quantitative,
}

/// Axis overrides; only explicit tick values are needed here.
#[derive(Serialize, Debug, Clone)]
pub struct Axis {
    pub values: Vec<f64>,
}

/// Binning instruction for a quantitative field.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Bin {
    pub step: f64,
}

/// Scale overrides: log axes and named color schemes.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// Legend overrides.
#[derive(Serialize, Debug, Clone)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A field reference with its encoding options.
///
/// Doubles as the tooltip entry type. `legend: Some(None)` serializes the
/// explicit `"legend": null` that suppresses an auto-generated legend.
#[derive(Serialize, Debug, Clone, Default)]
pub struct FieldDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Bin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Option<Legend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldDef {
    /// A nominal (categorical) field.
    pub fn nominal(field: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            field_type: Some(FieldType::Nominal),
            ..Default::default()
        }
    }

    /// A quantitative field.
    pub fn quantitative(field: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            field_type: Some(FieldType::Quantitative),
            ..Default::default()
        }
    }

    /// The `count()` aggregate.
    pub fn count() -> Self {
        Self {
            field_type: Some(FieldType::Quantitative),
            aggregate: Some("count".to_string()),
            ..Default::default()
        }
    }

    /// The `mean(field)` aggregate.
    pub fn mean(field: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            field_type: Some(FieldType::Quantitative),
            aggregate: Some("mean".to_string()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_bin_step(mut self, step: f64) -> Self {
        self.bin = Some(Bin { step });
        self
    }

    pub fn with_axis_values(mut self, values: &[f64]) -> Self {
        self.axis = Some(Axis {
            values: values.to_vec(),
        });
        self
    }

    pub fn with_log_scale(mut self) -> Self {
        self.scale.get_or_insert_with(Scale::default).scale_type = Some("log".to_string());
        self
    }

    /// Color the field on a named scheme.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scale.get_or_insert_with(Scale::default).scheme = Some(scheme.to_string());
        self
    }

    /// Number format for tooltips and text marks (d3 format string).
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Emit `"legend": null` so the channel draws no legend.
    pub fn without_legend(mut self) -> Self {
        self.legend = Some(None);
        self
    }
}

/// Param-gated branch of a conditional channel.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Condition {
    pub param: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Option<Legend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// A mark property channel: field-driven, param-conditional or constant.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Channel {
    Field(FieldDef),
    Conditional {
        condition: Condition,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },
    Value {
        value: Value,
    },
}

impl Channel {
    /// Encode `field` while `param` selects the datum, a constant otherwise.
    ///
    /// The legend-click highlight pattern: selected points take the field's
    /// categorical scale, everything else falls back to `fallback`.
    pub fn when_selected_field(
        param: &str,
        field: &str,
        legend_title: Option<&str>,
        fallback: &str,
    ) -> Self {
        Channel::Conditional {
            condition: Condition {
                param: param.to_string(),
                field: Some(field.to_string()),
                field_type: Some(FieldType::Nominal),
                legend: legend_title.map(|title| {
                    Some(Legend {
                        title: Some(title.to_string()),
                    })
                }),
                value: None,
            },
            value: Some(Value::String(fallback.to_string())),
        }
    }

    /// Constant-vs-constant switch on a selection (the dim-out pattern).
    pub fn when_selected_value(
        param: &str,
        selected: impl Into<Value>,
        fallback: impl Into<Value>,
    ) -> Self {
        Channel::Conditional {
            condition: Condition {
                param: param.to_string(),
                value: Some(selected.into()),
                ..Default::default()
            },
            value: Some(fallback.into()),
        }
    }

    /// A field-driven channel without conditions.
    pub fn field(def: FieldDef) -> Self {
        Channel::Field(def)
    }

    /// A constant channel value.
    pub fn constant(value: impl Into<Value>) -> Self {
        Channel::Value {
            value: value.into(),
        }
    }
}

/// The encoding block of a unit spec.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FieldDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<FieldDef>,
}

impl Encoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, def: FieldDef) -> Self {
        self.x = Some(def);
        self
    }

    pub fn y(mut self, def: FieldDef) -> Self {
        self.y = Some(def);
        self
    }

    pub fn size(mut self, def: FieldDef) -> Self {
        self.size = Some(def);
        self
    }

    pub fn color(mut self, channel: Channel) -> Self {
        self.color = Some(channel);
        self
    }

    pub fn stroke(mut self, channel: Channel) -> Self {
        self.stroke = Some(channel);
        self
    }

    pub fn opacity(mut self, channel: Channel) -> Self {
        self.opacity = Some(channel);
        self
    }

    pub fn text(mut self, def: FieldDef) -> Self {
        self.text = Some(def);
        self
    }

    pub fn tooltips(mut self, defs: Vec<FieldDef>) -> Self {
        self.tooltip = defs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_def_serialization() {
        let def = FieldDef::nominal("Category").with_title("Category");
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({"field": "Category", "type": "nominal", "title": "Category"})
        );
    }

    #[test]
    fn test_count_and_mean_aggregates() {
        assert_eq!(
            serde_json::to_value(FieldDef::count()).unwrap(),
            json!({"type": "quantitative", "aggregate": "count"})
        );
        assert_eq!(
            serde_json::to_value(FieldDef::mean("Rating").with_format(".2f")).unwrap(),
            json!({
                "field": "Rating",
                "type": "quantitative",
                "aggregate": "mean",
                "format": ".2f"
            })
        );
    }

    #[test]
    fn test_suppressed_legend_is_explicit_null() {
        let def = FieldDef::quantitative("Installs").without_legend();
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({"field": "Installs", "type": "quantitative", "legend": null})
        );
    }

    #[test]
    fn test_bin_axis_and_scale_options() {
        let def = FieldDef::quantitative("Rating")
            .with_bin_step(0.5)
            .with_axis_values(&[1.0, 2.0, 3.0]);
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({
                "field": "Rating",
                "type": "quantitative",
                "bin": {"step": 0.5},
                "axis": {"values": [1.0, 2.0, 3.0]}
            })
        );

        let log = FieldDef::quantitative("Reviews").with_log_scale();
        assert_eq!(
            serde_json::to_value(&log).unwrap(),
            json!({"field": "Reviews", "type": "quantitative", "scale": {"type": "log"}})
        );
    }

    #[test]
    fn test_conditional_field_channel() {
        let channel = Channel::when_selected_field(
            "content_selector",
            "Content Rating",
            Some("Content Rating"),
            "lightgrey",
        );
        assert_eq!(
            serde_json::to_value(&channel).unwrap(),
            json!({
                "condition": {
                    "param": "content_selector",
                    "field": "Content Rating",
                    "type": "nominal",
                    "legend": {"title": "Content Rating"}
                },
                "value": "lightgrey"
            })
        );
    }

    #[test]
    fn test_conditional_value_channel() {
        let channel = Channel::when_selected_value("content_selector", 1.0, 0.2);
        assert_eq!(
            serde_json::to_value(&channel).unwrap(),
            json!({
                "condition": {"param": "content_selector", "value": 1.0},
                "value": 0.2
            })
        );
    }

    #[test]
    fn test_constant_channel() {
        assert_eq!(
            serde_json::to_value(Channel::constant("steelblue")).unwrap(),
            json!({"value": "steelblue"})
        );
    }
}
