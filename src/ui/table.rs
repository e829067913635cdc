use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::ledger::{ledger_rows, LEDGER_COLUMNS};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Project ledger (bottom panel)
// ---------------------------------------------------------------------------

/// Render the filtered records as a table, oldest year first.
pub fn ledger_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Detailed Project Ledger");

    let Some(view) = state.view() else {
        ui.label("No dataset loaded.");
        return;
    };
    let rows = ledger_rows(&view.sorted_by_year());

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(48.0))
        .column(Column::initial(180.0).at_least(80.0))
        .column(Column::initial(320.0).at_least(120.0).clip(true))
        .column(Column::initial(140.0).at_least(80.0))
        .column(Column::remainder().at_least(120.0).clip(true))
        .header(20.0, |mut header| {
            for title in LEDGER_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let cells = rows[row.index()].cells();
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
