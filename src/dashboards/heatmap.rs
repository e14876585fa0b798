//! Heatmap Dashboard Module
//! A filter-count KPI, a category-by-binned-rating heatmap, a content-rating
//! bar and a log-scale reviews scatter, cross-filtered by the same three
//! interactions as the linked dashboard.

use polars::prelude::*;

use super::DashboardError;
use crate::data::{APP, CATEGORY, CONTENT_RATING, INSTALLS, RATING, REVIEWS};
use crate::vega::{
    records, Channel, DashboardSpec, Encoding, FieldDef, Mark, Param, Transform, UnitSpec,
    ViewSpec,
};

/// Columns a row must populate to enter this dashboard.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [CONTENT_RATING, CATEGORY, REVIEWS, INSTALLS, RATING];

pub const TITLE: &str = "Google Play Store - Heatmap Linked Dashboard";

/// Param names shared between views.
const LEGEND_SELECTION: &str = "content_selector";
const CATEGORY_BRUSH: &str = "category_brush";
const MIN_INSTALLS: &str = "min_installs";

/// The slider covers installs up to 1.2B regardless of the data, in fine
/// steps.
const INSTALL_SLIDER_MAX: i64 = 1_200_000_000;
const INSTALL_STEP: i64 = 100;

const UNSELECTED_COLOR: &str = "lightgrey";

/// Rating axis ticks at every half star.
const RATING_BIN_STEP: f64 = 0.5;
const RATING_HALF_TICKS: [f64; 9] = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];
const RATING_TICKS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Compose the heatmap dashboard spec from a cleaned frame.
///
/// The KPI hosts all three params so it re-evaluates on every interaction;
/// the heatmap hosts the brush and slider, the bar hosts the legend
/// selection.
pub fn build(df: &DataFrame) -> Result<DashboardSpec, DashboardError> {
    let data = records(df)?;
    let overview = ViewSpec::hconcat(vec![
        kpi_chart().into(),
        heatmap_chart().into(),
        bar_chart().into(),
    ]);

    Ok(DashboardSpec::new(
        TITLE,
        data,
        vec![overview, scatter_chart().into()],
    ))
}

/// Install-slider predicate every view filters on.
fn install_filter() -> Transform {
    Transform::filter_expr(format!("datum.Installs >= {MIN_INSTALLS}"))
}

fn install_slider() -> Param {
    Param::range_slider(
        MIN_INSTALLS,
        0,
        0,
        INSTALL_SLIDER_MAX,
        INSTALL_STEP,
        "min installs",
    )
}

/// App count surviving every filter, rendered as a number.
fn kpi_chart() -> UnitSpec {
    let encoding = Encoding::new().text(FieldDef::count().with_format(",.0f"));

    UnitSpec::new(Mark::text().with_text_style("left", "top", 20.0), encoding)
        .with_title("Apps after Filters")
        .with_size(200, 80)
        .filter(install_filter())
        .filter(Transform::filter_param(CATEGORY_BRUSH))
        .filter(Transform::filter_param(LEGEND_SELECTION))
        .add_param(install_slider())
        .add_param(Param::x_brush(CATEGORY_BRUSH))
        .add_param(Param::legend_point(LEGEND_SELECTION, CONTENT_RATING))
}

/// Category x binned rating, shaded by app count; hosts brush and slider.
fn heatmap_chart() -> UnitSpec {
    let encoding = Encoding::new()
        .x(FieldDef::nominal(CATEGORY).with_title("Category"))
        .y(FieldDef::quantitative(RATING)
            .with_bin_step(RATING_BIN_STEP)
            .with_title("Rating (binned)")
            .with_axis_values(&RATING_HALF_TICKS))
        .color(Channel::field(
            FieldDef::count().with_title("Apps").with_scheme("greenblue"),
        ))
        .tooltips(vec![
            FieldDef::nominal(CATEGORY).with_title("Category"),
            FieldDef::count().with_title("Apps in bin"),
        ]);

    UnitSpec::new(Mark::rect(), encoding)
        .with_title("Category x Rating (binned)")
        .with_size(800, 270)
        .filter(install_filter())
        .filter(Transform::filter_param(LEGEND_SELECTION))
        .add_param(Param::x_brush(CATEGORY_BRUSH))
        .add_param(install_slider())
}

/// Apps per content rating; hosts the legend selection and dims unselected
/// bars instead of hiding them.
fn bar_chart() -> UnitSpec {
    let encoding = Encoding::new()
        .x(FieldDef::nominal(CONTENT_RATING).with_title("Content Rating"))
        .y(FieldDef::count().with_title("Apps"))
        .opacity(Channel::when_selected_value(LEGEND_SELECTION, 1.0, 0.2))
        .color(Channel::when_selected_field(
            LEGEND_SELECTION,
            CONTENT_RATING,
            Some("Content Rating"),
            UNSELECTED_COLOR,
        ))
        .tooltips(vec![
            FieldDef::nominal(CONTENT_RATING).with_title("Content Rating"),
            FieldDef::count().with_title("# Apps"),
        ]);

    UnitSpec::new(Mark::bar(), encoding)
        .with_title("Apps by Content Rating")
        .with_size(150, 270)
        .filter(install_filter())
        .filter(Transform::filter_param(CATEGORY_BRUSH))
        .add_param(Param::legend_point(LEGEND_SELECTION, CONTENT_RATING))
}

/// Reviews (log) vs rating with fixed styling.
fn scatter_chart() -> UnitSpec {
    let encoding = Encoding::new()
        .x(FieldDef::quantitative(REVIEWS)
            .with_log_scale()
            .with_title("Reviews (log)"))
        .y(FieldDef::quantitative(RATING)
            .with_title("Rating")
            .with_axis_values(&RATING_TICKS))
        .tooltips(vec![
            FieldDef::nominal(APP).with_title("App"),
            FieldDef::nominal(CATEGORY).with_title("Category"),
            FieldDef::nominal(CONTENT_RATING).with_title("Content Rating"),
            FieldDef::quantitative(RATING).with_title("Rating"),
            FieldDef::quantitative(REVIEWS).with_title("Reviews"),
            FieldDef::quantitative(INSTALLS).with_title("Installs"),
        ]);

    UnitSpec::new(
        Mark::circle()
            .with_size(30.0)
            .with_opacity(0.6)
            .with_color("steelblue"),
        encoding,
    )
    .with_title("Reviews vs Rating")
    .with_size(1200, 300)
    .filter(install_filter())
    .filter(Transform::filter_param(CATEGORY_BRUSH))
    .filter(Transform::filter_param(LEGEND_SELECTION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cleaned_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(APP.into(), vec![Some("Photo Editor"), Some("Classic Game")]),
            Column::new(CATEGORY.into(), vec![Some("ART_AND_DESIGN"), Some("GAME")]),
            Column::new(
                CONTENT_RATING.into(),
                vec![Some("Everyone"), Some("Everyone 10+")],
            ),
            Column::new(RATING.into(), vec![Some(4.1), Some(4.4)]),
            Column::new(REVIEWS.into(), vec![Some(159.0), Some(21_450.0)]),
            Column::new(INSTALLS.into(), vec![10_000i64, 50_000_000]),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_layout() {
        let spec = build(&cleaned_frame()).unwrap();
        assert_eq!(spec.title, TITLE);

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["vconcat"].as_array().unwrap().len(), 2);
        assert_eq!(value["vconcat"][0]["hconcat"].as_array().unwrap().len(), 3);
        assert_eq!(value["vconcat"][1]["title"], "Reviews vs Rating");
    }

    #[test]
    fn test_kpi_hosts_every_param() {
        let value = serde_json::to_value(build(&cleaned_frame()).unwrap()).unwrap();
        let kpi = &value["vconcat"][0]["hconcat"][0];

        let names: Vec<_> = kpi["params"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["min_installs", "category_brush", "content_selector"]);
        assert_eq!(kpi["encoding"]["text"]["format"], ",.0f");
        assert_eq!(
            kpi["mark"],
            json!({"type": "text", "align": "left", "baseline": "top", "fontSize": 20.0})
        );
        assert_eq!(kpi["transform"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_slider_bound_is_fixed() {
        let value = serde_json::to_value(build(&cleaned_frame()).unwrap()).unwrap();
        let slider = &value["vconcat"][0]["hconcat"][0]["params"][0];

        // Not derived from the data, unlike the linked dashboard.
        assert_eq!(slider["bind"]["max"], 1_200_000_000);
        assert_eq!(slider["bind"]["step"], 100);
    }

    #[test]
    fn test_heatmap_bins_and_scheme() {
        let value = serde_json::to_value(build(&cleaned_frame()).unwrap()).unwrap();
        let heatmap = &value["vconcat"][0]["hconcat"][1];

        assert_eq!(heatmap["mark"], json!({"type": "rect"}));
        assert_eq!(heatmap["encoding"]["y"]["bin"], json!({"step": 0.5}));
        assert_eq!(
            heatmap["encoding"]["y"]["axis"]["values"],
            json!([1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0])
        );
        assert_eq!(
            heatmap["encoding"]["color"]["scale"],
            json!({"scheme": "greenblue"})
        );
        // Filtered by slider and legend selection, not by its own brush.
        assert_eq!(
            heatmap["transform"],
            json!([
                {"filter": "datum.Installs >= min_installs"},
                {"filter": {"param": "content_selector"}}
            ])
        );
    }

    #[test]
    fn test_bar_dims_unselected_ratings() {
        let value = serde_json::to_value(build(&cleaned_frame()).unwrap()).unwrap();
        let bar = &value["vconcat"][0]["hconcat"][2];

        assert_eq!(
            bar["encoding"]["opacity"],
            json!({
                "condition": {"param": "content_selector", "value": 1.0},
                "value": 0.2
            })
        );
        assert_eq!(
            bar["encoding"]["color"]["condition"]["legend"]["title"],
            "Content Rating"
        );
        assert_eq!(bar["params"][0]["bind"], "legend");
    }

    #[test]
    fn test_scatter_log_axis_and_filters() {
        let value = serde_json::to_value(build(&cleaned_frame()).unwrap()).unwrap();
        let scatter = &value["vconcat"][1];

        assert_eq!(scatter["encoding"]["x"]["scale"], json!({"type": "log"}));
        assert_eq!(
            scatter["encoding"]["y"]["axis"]["values"],
            json!([1.0, 2.0, 3.0, 4.0, 5.0])
        );
        assert_eq!(
            scatter["mark"],
            json!({"type": "circle", "size": 30.0, "opacity": 0.6, "color": "steelblue"})
        );
        assert_eq!(scatter["transform"].as_array().unwrap().len(), 3);
    }
}
