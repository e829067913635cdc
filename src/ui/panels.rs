use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};

use crate::data::filter::{LocationField, SearchScope};
use crate::state::{AppState, Selector};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Database");
    ui.label("Explore the global reach of student-led peace initiatives.");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Keyword search ----
            ui.strong("Keyword Search");
            let hint = match state.criteria.search_scope {
                SearchScope::TitleAndLeaders => "Search titles or leaders...",
                SearchScope::TitleLeadersAndCountry => "Search titles, leaders or countries...",
            };
            let mut query = state.criteria.search.clone();
            if ui
                .add(TextEdit::singleline(&mut query).hint_text(hint))
                .changed()
            {
                state.set_search(&query);
            }
            ui.separator();

            let location_label = match state.criteria.location_field {
                LocationField::Country => "Countries",
                LocationField::Region => "Regions",
            };
            selector_section(ui, state, Selector::Year, "Years", true);
            selector_section(ui, state, Selector::Institution, "Institutions", false);
            selector_section(ui, state, Selector::Location, location_label, false);
        });
}

/// One collapsible multi-select list.
fn selector_section(
    ui: &mut Ui,
    state: &mut AppState,
    selector: Selector,
    title: &str,
    default_open: bool,
) {
    // Clone what we need so we can mutate state inside the loop.
    let options = state.options(selector).to_vec();
    let n_selected = state.selection(selector).len();
    let n_total = options.len();
    let header_text = if n_selected == 0 && selector != Selector::Year {
        format!("{title}  (any)")
    } else {
        format!("{title}  ({n_selected}/{n_total})")
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(default_open)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(selector);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(selector);
                }
            });

            for value in &options {
                let mut checked = state.selection(selector).contains(value);

                // Years carry their legend colour.
                let mut text = RichText::new(value);
                if selector == Selector::Year {
                    if let Some(cm) = &state.color_map {
                        text = text.color(cm.color_for(value));
                    }
                }

                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle(selector, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

pub fn metrics_row(ui: &mut Ui, state: &AppState) {
    let summary = state.summary;
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Projects", summary.projects);
        metric(&mut cols[1], "Nations Impacted", summary.nations);
        metric(&mut cols[2], "University Partners", summary.institutions);
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(label);
        ui.heading(value.to_string());
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                reload(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export ledger…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} projects loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open project registry")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn reload(state: &mut AppState) {
    if let Err(e) = state.reload() {
        log::error!("Failed to reload: {e:#}");
        state.status_message = Some(format!("Error: {e:#}"));
    }
}

fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export ledger")
        .add_filter("CSV", &["csv"])
        .set_file_name("ledger.csv")
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_ledger(&path) {
            log::warn!("Export to {} failed: {e:#}", path.display());
            state.status_message = Some(format!("Export failed: {e:#}"));
        }
    }
}
