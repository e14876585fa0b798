//! Marks, unit specs and concat composition.

use serde::Serialize;

use super::{Encoding, InlineData, Param, Transform};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Mark geometry.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Circle,
    Rect,
    Text,
}

/// Mark definition with the style properties the dashboards set.
#[derive(Serialize, Debug, Clone)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    /// `Some(None)` serializes `"fill": null` for outline-only circles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl Mark {
    fn new(mark_type: MarkType) -> Self {
        Self {
            mark_type,
            fill: None,
            size: None,
            opacity: None,
            color: None,
            align: None,
            baseline: None,
            font_size: None,
        }
    }

    pub fn bar() -> Self {
        Self::new(MarkType::Bar)
    }

    pub fn circle() -> Self {
        Self::new(MarkType::Circle)
    }

    pub fn rect() -> Self {
        Self::new(MarkType::Rect)
    }

    pub fn text() -> Self {
        Self::new(MarkType::Text)
    }

    /// Draw outlines only (`"fill": null`).
    pub fn unfilled(mut self) -> Self {
        self.fill = Some(None);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Text anchoring and size for text marks.
    pub fn with_text_style(mut self, align: &str, baseline: &str, font_size: f64) -> Self {
        self.align = Some(align.to_string());
        self.baseline = Some(baseline.to_string());
        self.font_size = Some(font_size);
        self
    }
}

/// A single chart view.
#[derive(Serialize, Debug, Clone)]
pub struct UnitSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub mark: Mark,
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

impl UnitSpec {
    pub fn new(mark: Mark, encoding: Encoding) -> Self {
        Self {
            title: None,
            width: None,
            height: None,
            mark,
            encoding,
            transform: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Subscribe this view to a filter.
    pub fn filter(mut self, transform: Transform) -> Self {
        self.transform.push(transform);
        self
    }

    /// Host a param on this view. Selections are scoped to the hosting view;
    /// variable params become page-level inputs.
    pub fn add_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

/// A view-tree node: a unit chart or a concat row/column.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum ViewSpec {
    Unit(UnitSpec),
    HConcat { hconcat: Vec<ViewSpec> },
    VConcat { vconcat: Vec<ViewSpec> },
}

impl ViewSpec {
    pub fn hconcat(views: Vec<ViewSpec>) -> Self {
        ViewSpec::HConcat { hconcat: views }
    }

    pub fn vconcat(views: Vec<ViewSpec>) -> Self {
        ViewSpec::VConcat { vconcat: views }
    }
}

impl From<UnitSpec> for ViewSpec {
    fn from(unit: UnitSpec) -> Self {
        ViewSpec::Unit(unit)
    }
}

/// Top-level dashboard: shared inline data plus a vertical stack of views.
///
/// Hoisting the data to the root lets every linked view filter the same
/// rows without re-embedding them.
#[derive(Serialize, Debug, Clone)]
pub struct DashboardSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub title: String,
    pub data: InlineData,
    pub vconcat: Vec<ViewSpec>,
}

impl DashboardSpec {
    pub fn new(title: &str, data: InlineData, views: Vec<ViewSpec>) -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA,
            title: title.to_string(),
            data,
            vconcat: views,
        }
    }
}
