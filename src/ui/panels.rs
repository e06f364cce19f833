use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Dimension};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

const DIMENSIONS: [(Dimension, &str); 4] = [
    (Dimension::ContentType, "Content Type"),
    (Dimension::Country, "Country"),
    (Dimension::Rating, "Rating"),
    (Dimension::Genre, "Genre"),
];

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (dim, label) in DIMENSIONS {
                filter_section(ui, state, dim, label);
            }
        });
}

/// One collapsible checkbox section for a filter dimension.
fn filter_section(ui: &mut Ui, state: &mut AppState, dim: Dimension, label: &str) {
    let all_values = state.options(dim).clone();

    // Show count of selected / total in the header
    let n_selected = state.selection(dim).len();
    let header_text = format!("{label}  ({n_selected}/{})", all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            // Select all / none buttons
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(dim);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(dim);
                }
            });

            let mut changed = false;
            let selected = state.selection_mut(dim);
            for value in &all_values {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
                    changed = true;
                }
            }
            if changed {
                state.refilter();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Catalog Analytics");

        ui.separator();

        ui.label(format!(
            "{} titles loaded, {} matching",
            state.table.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui.button("Reload").clicked() {
            state.reload();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
