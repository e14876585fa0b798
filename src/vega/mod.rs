//! Vega-Lite spec module - typed chart composition
//!
//! A serde model of the Vega-Lite v5 fragments the dashboards are built
//! from: field encodings, marks, interaction params, filter transforms and
//! concat composition. Serializing a [`DashboardSpec`] yields the JSON the
//! in-page Vega runtime consumes; nothing here renders anything itself.

mod data;
mod encoding;
mod params;
mod spec;
mod transform;

pub use data::{records, DataError, InlineData};
pub use encoding::{Axis, Bin, Channel, Condition, Encoding, FieldDef, FieldType, Legend, Scale};
pub use params::{Param, RangeBinding, SelectionDef};
pub use spec::{DashboardSpec, Mark, MarkType, UnitSpec, ViewSpec, VEGA_LITE_SCHEMA};
pub use transform::{Predicate, Transform};
