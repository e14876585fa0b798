//! Linked Dashboard Module
//! Category bar, rating/reviews scatter and an average-rating KPI bar,
//! cross-filtered by a legend selection, a category brush and an install
//! slider.

use polars::prelude::*;

use super::DashboardError;
use crate::data::{APP, CATEGORY, CONTENT_RATING, INSTALLS, RATING, REVIEWS};
use crate::vega::{
    records, Channel, DashboardSpec, Encoding, FieldDef, Mark, Param, Transform, UnitSpec,
    ViewSpec,
};

/// Columns a row must populate to enter this dashboard.
pub const REQUIRED_COLUMNS: [&str; 4] = [CATEGORY, CONTENT_RATING, INSTALLS, REVIEWS];

pub const TITLE: &str = "Google Play Store - Linked Dashboard";

/// Param names shared between views.
const LEGEND_SELECTION: &str = "rating_selector";
const CATEGORY_BRUSH: &str = "category_brush";
const MIN_INSTALLS: &str = "min_installs";

/// Install-slider granularity.
const INSTALL_STEP: i64 = 10_000_000;

const UNSELECTED_COLOR: &str = "lightgrey";

/// Compose the dashboard spec from a cleaned frame.
///
/// The install slider spans the observed install counts; the bar hosts the
/// brush and slider, the scatter hosts the legend selection, and every view
/// subscribes to the params it does not host through filter transforms.
pub fn build(df: &DataFrame) -> Result<DashboardSpec, DashboardError> {
    let max_installs = df
        .column(INSTALLS)?
        .i64()?
        .max()
        .ok_or(DashboardError::NoInstallCounts)?;
    tracing::debug!(max_installs, "derived slider bound");

    let data = records(df)?;
    let bottom = ViewSpec::hconcat(vec![scatter_chart().into(), kpi_chart().into()]);

    Ok(DashboardSpec::new(
        TITLE,
        data,
        vec![bar_chart(max_installs).into(), bottom],
    ))
}

/// Install-slider predicate every view filters on.
fn install_filter() -> Transform {
    Transform::filter_expr(format!("datum.Installs >= {MIN_INSTALLS}"))
}

/// Apps per category; hosts the brush and the install slider.
fn bar_chart(max_installs: i64) -> UnitSpec {
    let encoding = Encoding::new()
        .x(FieldDef::nominal(CATEGORY).with_title("Category"))
        .y(FieldDef::count().with_title("Number of Apps"))
        .tooltips(vec![
            FieldDef::nominal(CATEGORY).with_title("Category"),
            FieldDef::count().with_title("# Apps"),
        ]);

    UnitSpec::new(Mark::bar(), encoding)
        .with_size(800, 200)
        .filter(install_filter())
        .add_param(Param::x_brush(CATEGORY_BRUSH))
        .add_param(Param::range_slider(
            MIN_INSTALLS,
            0,
            0,
            max_installs,
            INSTALL_STEP,
            "min installs",
        ))
}

/// Rating vs reviews, sized by installs; hosts the legend selection.
fn scatter_chart() -> UnitSpec {
    let encoding = Encoding::new()
        .x(FieldDef::quantitative(RATING).with_title("Rating"))
        .y(FieldDef::quantitative(REVIEWS).with_title("Reviews"))
        .size(
            FieldDef::quantitative(INSTALLS)
                .with_title("Installs")
                .without_legend(),
        )
        .color(Channel::when_selected_field(
            LEGEND_SELECTION,
            CONTENT_RATING,
            Some("Content Rating"),
            UNSELECTED_COLOR,
        ))
        .stroke(Channel::when_selected_field(
            LEGEND_SELECTION,
            CONTENT_RATING,
            None,
            UNSELECTED_COLOR,
        ))
        .tooltips(vec![
            FieldDef::nominal(APP).with_title("Apps"),
            FieldDef::nominal(CATEGORY).with_title("Category"),
            FieldDef::nominal(CONTENT_RATING).with_title("Content Rating"),
            FieldDef::quantitative(RATING).with_title("Rating"),
            FieldDef::quantitative(REVIEWS).with_title("Reviews"),
            FieldDef::quantitative(INSTALLS).with_title("Installs"),
        ]);

    UnitSpec::new(Mark::circle().unfilled(), encoding)
        .with_size(600, 300)
        .filter(install_filter())
        .filter(Transform::filter_param(CATEGORY_BRUSH))
        .filter(Transform::filter_param(LEGEND_SELECTION))
        .add_param(Param::legend_point(LEGEND_SELECTION, CONTENT_RATING))
}

/// Average rating per content rating; constant color so the scatter's
/// legend stays the only one.
fn kpi_chart() -> UnitSpec {
    let encoding = Encoding::new()
        .x(FieldDef::nominal(CONTENT_RATING).with_title("Content Rating"))
        .y(FieldDef::mean(RATING).with_title("Avg Rating"))
        .color(Channel::constant("steelblue"))
        .tooltips(vec![
            FieldDef::nominal(CONTENT_RATING).with_title("Content Rating"),
            FieldDef::mean(RATING).with_title("Avg Rating").with_format(".2f"),
        ]);

    UnitSpec::new(Mark::bar(), encoding)
        .with_size(250, 300)
        .filter(install_filter())
        .filter(Transform::filter_param(CATEGORY_BRUSH))
        .filter(Transform::filter_param(LEGEND_SELECTION))
}
