//! Chart.js document construction
//!
//! Builds the declarative chart config QuickChart renders server-side. The
//! layout mirrors the history charts shown on a plugin's bStats page.

use crate::types::SeriesPoint;
use serde_json::{json, Value};

/// Line and fill color of the dataset
const SERIES_COLOR: &str = "rgb(54, 162, 235)";

/// Title rendered above the chart
const CHART_TITLE: &str = "bStats.org";

/// Format the time axis uses to parse x values
const TIME_PARSER_FORMAT: &str = "MM/DD/YYYY HH:mm";

/// Human-facing dataset label for a chart key (`servers` → `Servers`)
pub fn display_label(chart_key: &str) -> String {
    let mut chars = chart_key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the line-chart document for one dataset
///
/// Every series point becomes an `{x, y}` pair with `x` formatted the way
/// the time axis parser expects.
pub fn line_chart_config(label: &str, series: &[SeriesPoint]) -> Value {
    let data: Vec<Value> = series
        .iter()
        .map(|point| json!({ "x": point.date.to_date_format(), "y": point.value }))
        .collect();

    json!({
        "type": "line",
        "data": {
            "datasets": [{
                "label": label,
                "backgroundColor": SERIES_COLOR,
                "borderColor": SERIES_COLOR,
                "pointRadius": 0,
                "borderWidth": 1,
                "data": data,
                "fill": false,
            }]
        },
        "options": {
            "title": { "display": true, "text": CHART_TITLE },
            "legend": { "display": true, "position": "bottom" },
            "scales": {
                "xAxes": [{ "type": "time", "time": { "parser": TIME_PARSER_FORMAT } }],
                "yAxes": [{ "id": "Y1", "display": true, "position": "right" }],
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DayKey;
    use chrono::NaiveDate;

    fn make_series(values: &[(u32, i64)]) -> Vec<SeriesPoint> {
        values
            .iter()
            .map(|&(day, value)| SeriesPoint {
                date: DayKey::from(NaiveDate::from_ymd_opt(2024, 3, day).unwrap()),
                value,
            })
            .collect()
    }

    // ========== display_label tests ==========

    #[test]
    fn test_display_label_capitalizes_first_letter() {
        assert_eq!(display_label("servers"), "Servers");
        assert_eq!(display_label("players"), "Players");
    }

    #[test]
    fn test_display_label_single_char() {
        assert_eq!(display_label("x"), "X");
    }

    #[test]
    fn test_display_label_empty() {
        assert_eq!(display_label(""), "");
    }

    // ========== line_chart_config tests ==========

    #[test]
    fn test_line_chart_with_one_dataset() {
        let config = line_chart_config("Servers", &make_series(&[(1, 9)]));

        assert_eq!(config["type"], "line");
        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0]["label"], "Servers");
    }

    #[test]
    fn test_dataset_points_keep_series_order() {
        let config = line_chart_config("Servers", &make_series(&[(1, 9), (2, 0), (3, 4)]));

        let data = config["data"]["datasets"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["x"], "03/01/2024 00:00");
        assert_eq!(data[0]["y"], 9);
        assert_eq!(data[1]["y"], 0);
        assert_eq!(data[2]["x"], "03/03/2024 00:00");
        assert_eq!(data[2]["y"], 4);
    }

    #[test]
    fn test_dataset_styling() {
        let config = line_chart_config("Servers", &make_series(&[(1, 9)]));

        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["backgroundColor"], "rgb(54, 162, 235)");
        assert_eq!(dataset["borderColor"], "rgb(54, 162, 235)");
        assert_eq!(dataset["pointRadius"], 0);
        assert_eq!(dataset["borderWidth"], 1);
        assert_eq!(dataset["fill"], false);
    }

    #[test]
    fn test_axes_legend_and_title() {
        let config = line_chart_config("Servers", &make_series(&[(1, 9)]));

        let options = &config["options"];
        assert_eq!(options["title"]["display"], true);
        assert_eq!(options["title"]["text"], "bStats.org");
        assert_eq!(options["legend"]["position"], "bottom");

        let x_axis = &options["scales"]["xAxes"][0];
        assert_eq!(x_axis["type"], "time");
        assert_eq!(x_axis["time"]["parser"], "MM/DD/YYYY HH:mm");

        let y_axis = &options["scales"]["yAxes"][0];
        assert_eq!(y_axis["id"], "Y1");
        assert_eq!(y_axis["position"], "right");
        assert_eq!(y_axis["display"], true);
    }

    #[test]
    fn test_empty_series_still_builds() {
        let config = line_chart_config("Servers", &[]);

        let data = config["data"]["datasets"][0]["data"].as_array().unwrap();
        assert!(data.is_empty());
    }
}
