use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::data::filter::ProjectView;
use crate::data::model::ProjectRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Project map (central panel)
// ---------------------------------------------------------------------------

/// Render the projects as a longitude/latitude scatter, one series per year.
pub fn project_map(ui: &mut Ui, state: &AppState) {
    let Some(view) = state.view() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a registry to view projects  (File → Open…)");
        });
        return;
    };

    // Series are added oldest first so the legend reads chronologically.
    let sorted = view.sorted_by_year();
    let series = year_series(&sorted);
    let color_map = &state.color_map;

    Plot::new("project_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| hover_label(&sorted, name, value))
        .show(ui, |plot_ui| {
            for (year, coords) in &series {
                let color = color_map
                    .as_ref()
                    .map(|cm| cm.color_for(year))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = coords.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(year)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

/// Group a year-sorted view into `(year, [lon, lat]...)` runs.
fn year_series(view: &ProjectView<'_>) -> Vec<(String, Vec<[f64; 2]>)> {
    let mut series: Vec<(String, Vec<[f64; 2]>)> = Vec::new();
    for rec in view.records() {
        let point = [rec.longitude, rec.latitude];
        let same_year = series
            .last()
            .is_some_and(|(year, _)| year == rec.year.as_str());
        match series.last_mut() {
            Some((_, coords)) if same_year => coords.push(point),
            _ => series.push((rec.year.to_string(), vec![point])),
        }
    }
    series
}

/// Tooltip text: the project under the cursor, or bare coordinates.
fn hover_label(view: &ProjectView<'_>, series: &str, value: &PlotPoint) -> String {
    if series.is_empty() {
        return format!("lon {:.2}, lat {:.2}", value.x, value.y);
    }
    match nearest_in_year(view, series, value.x, value.y) {
        Some(rec) => describe(rec),
        None => format!("{series}\nlon {:.2}, lat {:.2}", value.x, value.y),
    }
}

fn nearest_in_year<'a>(
    view: &ProjectView<'a>,
    year: &str,
    lon: f64,
    lat: f64,
) -> Option<&'a ProjectRecord> {
    view.records()
        .filter(|rec| rec.year.as_str() == year)
        .min_by(|a, b| {
            let da = (a.longitude - lon).powi(2) + (a.latitude - lat).powi(2);
            let db = (b.longitude - lon).powi(2) + (b.latitude - lat).powi(2);
            da.total_cmp(&db)
        })
}

fn describe(rec: &ProjectRecord) -> String {
    let or_blank = |v: &Option<String>| v.clone().unwrap_or_default();
    format!(
        "{}\nInstitution: {}\nCountry: {}\nLeader(s): {}\nYear: {}",
        or_blank(&rec.title),
        rec.institution,
        or_blank(&rec.country),
        or_blank(&rec.leaders),
        rec.year
    )
}
