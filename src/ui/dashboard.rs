use std::ops::RangeInclusive;

use eframe::egui::{self, vec2, Align2, FontId, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::aggregate::{self, DurationHistogram, TrendSeries};
use crate::data::export::{self, EXPORT_FILE_NAME};
use crate::state::AppState;
use crate::ui::counter;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the central dashboard: KPI row, charts, export control.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            kpi_row(ui, state);
            ui.separator();

            let table = &state.table;
            let indices = &state.visible_indices;

            ui.columns(2, |cols: &mut [Ui]| {
                chart_heading(&mut cols[0], "Movies vs TV Shows");
                type_donut(&mut cols[0], &aggregate::type_counts(table, indices));
                chart_heading(&mut cols[1], "Content Release Trend");
                release_trend(&mut cols[1], &aggregate::yearly_trend(table, indices));
            });
            ui.separator();

            ui.columns(2, |cols: &mut [Ui]| {
                chart_heading(&mut cols[0], "Top Content Producing Countries");
                top_countries(&mut cols[0], &aggregate::top_countries(table, indices));
                chart_heading(&mut cols[1], "Ratings Distribution");
                rating_distribution(&mut cols[1], &aggregate::rating_counts(table, indices));
            });
            ui.separator();

            chart_heading(ui, "Movie Duration Distribution");
            duration_histogram(ui, aggregate::duration_histogram(table, indices).as_ref());
            ui.separator();

            export_section(ui, state);
        });
}

fn kpi_row(ui: &mut Ui, state: &AppState) {
    ui.columns(4, |cols: &mut [Ui]| {
        counter::kpi_card(&mut cols[0], "Total Titles", &state.reveals.total);
        counter::kpi_card(&mut cols[1], "Movies", &state.reveals.movies);
        counter::kpi_card(&mut cols[2], "TV Shows", &state.reveals.tv_shows);
        counter::kpi_card(&mut cols[3], "Countries", &state.reveals.countries);
    });
}

fn chart_heading(ui: &mut Ui, title: &str) {
    ui.add_space(4.0);
    ui.strong(title);
}

fn no_data(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.label(RichText::new("No titles match the current filters").weak());
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Type distribution (donut)
// ---------------------------------------------------------------------------

/// Donut chart of the content-type split, percentage labels on the wedges.
fn type_donut(ui: &mut Ui, counts: &[(String, usize)]) {
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        no_data(ui);
        return;
    }

    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), CHART_HEIGHT), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let outer = (rect.height().min(rect.width()) * 0.5 - 8.0).max(10.0);
    let inner = outer * 0.6;

    let mut angle = -std::f32::consts::FRAC_PI_2; // start at 12 o'clock
    for (slot, (label, count)) in counts.iter().enumerate() {
        let fraction = *count as f32 / total as f32;
        let sweep = fraction * std::f32::consts::TAU;
        let fill = color::type_color(label, slot);

        // Tessellate the wedge into small convex quads.
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for step in 0..steps {
            let a0 = angle + sweep * step as f32 / steps as f32;
            let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
            let quad = vec![
                center + inner * vec2(a0.cos(), a0.sin()),
                center + outer * vec2(a0.cos(), a0.sin()),
                center + outer * vec2(a1.cos(), a1.sin()),
                center + inner * vec2(a1.cos(), a1.sin()),
            ];
            painter.add(Shape::convex_polygon(quad, fill, Stroke::NONE));
        }

        let mid = angle + sweep * 0.5;
        let label_pos = center + (inner + outer) * 0.5 * vec2(mid.cos(), mid.sin());
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{label} {:.1}%", 100.0 * fraction),
            FontId::proportional(12.0),
            egui::Color32::BLACK,
        );

        angle += sweep;
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        "Content\nSplit",
        FontId::proportional(14.0),
        ui.visuals().strong_text_color(),
    );
}

// ---------------------------------------------------------------------------
// Yearly release trend
// ---------------------------------------------------------------------------

/// One line per content type over release years.
fn release_trend(ui: &mut Ui, series: &[TrendSeries]) {
    if series.is_empty() {
        no_data(ui);
        return;
    }

    Plot::new("release_trend")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Release Year")
        .y_axis_label("Number of Titles")
        .show(ui, |plot_ui| {
            for (slot, trend) in series.iter().enumerate() {
                let points: PlotPoints = trend
                    .points
                    .iter()
                    .map(|&(year, count)| [year as f64, count as f64])
                    .collect();

                plot_ui.line(
                    Line::new(points)
                        .name(&trend.content_type)
                        .color(color::type_color(&trend.content_type, slot))
                        .width(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Top countries (horizontal ranked bars)
// ---------------------------------------------------------------------------

fn top_countries(ui: &mut Ui, ranked: &[(String, usize)]) {
    if ranked.is_empty() {
        no_data(ui);
        return;
    }

    let n = ranked.len();
    let ramp = color::red_ramp(n);

    // Rank 0 drawn at the top.
    let bars: Vec<Bar> = ranked
        .iter()
        .enumerate()
        .map(|(rank, (country, count))| {
            Bar::new((n - 1 - rank) as f64, *count as f64)
                .name(country)
                .fill(ramp[rank])
                .width(0.7)
        })
        .collect();

    // Axis labels indexed by plot position, i.e. rank order reversed.
    let labels: Vec<String> = ranked
        .iter()
        .rev()
        .map(|(country, _)| country.clone())
        .collect();
    Plot::new("top_countries")
        .height(CHART_HEIGHT)
        .x_axis_label("Number of Titles")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            axis_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Rating distribution
// ---------------------------------------------------------------------------

fn rating_distribution(ui: &mut Ui, counts: &[(String, usize)]) {
    if counts.is_empty() {
        no_data(ui);
        return;
    }

    let palette = color::generate_palette(counts.len());
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(slot, (rating, count))| {
            Bar::new(slot as f64, *count as f64)
                .name(rating)
                .fill(palette[slot])
                .width(0.7)
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|(rating, _)| rating.clone()).collect();
    Plot::new("rating_distribution")
        .height(CHART_HEIGHT)
        .y_axis_label("Number of Titles")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            axis_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Map an integer axis position to its category label, blank elsewhere.
fn axis_label(labels: &[String], value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() > 0.05 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Duration histogram
// ---------------------------------------------------------------------------

fn duration_histogram(ui: &mut Ui, histogram: Option<&DurationHistogram>) {
    let Some(histogram) = histogram else {
        no_data(ui);
        return;
    };

    let bars: Vec<Bar> = histogram
        .counts
        .iter()
        .enumerate()
        .map(|(bin, &count)| {
            let center = histogram.start + histogram.bin_width * (bin as f64 + 0.5);
            Bar::new(center, count as f64)
                .width(histogram.bin_width)
                .fill(color::HISTOGRAM_FILL)
        })
        .collect();

    Plot::new("duration_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Duration (minutes)")
        .y_axis_label("Movies")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

fn export_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Download Filtered Dataset");
    ui.label(format!(
        "{} rows in the current view",
        state.visible_indices.len()
    ));
    if ui.button("Download CSV").clicked() {
        save_export(state);
    }
}

/// Ask for a destination and write the active view as CSV.
fn save_export(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Save filtered catalog")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    match export::write_export(&path, &state.table, &state.visible_indices) {
        Ok(()) => {
            log::info!(
                "exported {} rows to {}",
                state.visible_indices.len(),
                path.display()
            );
            state.status_message =
                Some(format!("Exported {} rows", state.visible_indices.len()));
        }
        Err(e) => {
            log::error!("export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
