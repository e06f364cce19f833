use std::collections::BTreeSet;
use std::time::Instant;

use crate::data::aggregate::{self, Metrics};
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::loader::CatalogCache;
use crate::data::model::CatalogTable;
use crate::ui::counter::KpiReveals;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which filter dimension a sidebar section controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    ContentType,
    Country,
    Rating,
    Genre,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source-file cache backing the Reload action.
    pub cache: CatalogCache,

    /// Cleaned dataset, immutable between (re)loads.
    pub table: CatalogTable,

    /// Per-dimension filter selections.
    pub filters: FilterState,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// KPI values for the current view.
    pub metrics: Metrics,

    /// Animated KPI counters.
    pub reveals: KpiReveals,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state around a freshly loaded table.
    pub fn new(cache: CatalogCache, table: CatalogTable) -> Self {
        let filters = init_filter_state(&table);
        let visible_indices: Vec<usize> = (0..table.len()).collect();
        let metrics = aggregate::metrics(&table, &visible_indices);
        let reveals = KpiReveals::new(&metrics);
        Self {
            cache,
            table,
            filters,
            visible_indices,
            metrics,
            reveals,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and reset filters to "everything".
    pub fn set_table(&mut self, table: CatalogTable) {
        self.filters = init_filter_state(&table);
        self.table = table;
        self.visible_indices = (0..self.table.len()).collect();
        self.refresh_metrics();
        self.status_message = None;
    }

    /// Recompute the active view after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.filters);
        self.refresh_metrics();
    }

    /// Restart the KPI animations whenever the headline numbers change.
    fn refresh_metrics(&mut self) {
        let metrics = aggregate::metrics(&self.table, &self.visible_indices);
        if metrics != self.metrics {
            self.metrics = metrics;
            self.reveals.restart(&metrics);
        }
    }

    /// Advance the KPI animations.
    pub fn tick_reveals(&mut self) {
        self.reveals.tick(Instant::now());
    }

    /// All observed values for a dimension.
    pub fn options(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::ContentType => &self.table.content_types,
            Dimension::Country => &self.table.countries,
            Dimension::Rating => &self.table.ratings,
            Dimension::Genre => &self.table.genres,
        }
    }

    /// Current selection for a dimension.
    pub fn selection(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::ContentType => &self.filters.content_types,
            Dimension::Country => &self.filters.countries,
            Dimension::Rating => &self.filters.ratings,
            Dimension::Genre => &self.filters.genres,
        }
    }

    /// Mutable selection for a dimension.
    pub fn selection_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::ContentType => &mut self.filters.content_types,
            Dimension::Country => &mut self.filters.countries,
            Dimension::Rating => &mut self.filters.ratings,
            Dimension::Genre => &mut self.filters.genres,
        }
    }

    /// Select every value in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        let all = self.options(dim).clone();
        *self.selection_mut(dim) = all;
        self.refilter();
    }

    /// Clear a dimension's selection, hiding every row.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection_mut(dim).clear();
        self.refilter();
    }

    /// Re-read the source file if it changed on disk.
    ///
    /// A failed re-read keeps the current table and surfaces the error on
    /// the status line.
    pub fn reload(&mut self) {
        match self.cache.refresh() {
            Ok(Some(table)) => {
                log::info!(
                    "reloaded {} rows from {}",
                    table.len(),
                    self.cache.path().display()
                );
                self.set_table(table);
            }
            Ok(None) => {
                self.status_message = Some("Dataset unchanged on disk".to_string());
            }
            Err(e) => {
                log::error!("reload failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
