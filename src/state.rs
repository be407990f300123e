use std::collections::BTreeSet;

use crate::color::CategoryColors;
use crate::data::filter::{filter, FilterCriteria};
use crate::data::model::Dataset;
use crate::data::samples;
use crate::data::summary::{summarize, Summary};

// ---------------------------------------------------------------------------
// View identity
// ---------------------------------------------------------------------------

/// The two logical views of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    ProteinSources,
    FoodSecurity,
}

impl ViewKind {
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::ProteinSources => "Protein Sources",
            ViewKind::FoodSecurity => "Food Security",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-view state
// ---------------------------------------------------------------------------

/// State owned by a single view.
///
/// Each view holds its own criteria: filter controls of one view never leak
/// into the other. Every criteria change recomputes `visible` and `summary`
/// from scratch; the tables are small enough that nothing is cached beyond
/// the current frame's result.
pub struct ViewState {
    pub dataset: Dataset,
    pub criteria: FilterCriteria,
    pub visible: Vec<usize>,
    pub summary: Summary,
    pub colors: CategoryColors,
    /// Set while the criteria are malformed (inverted range); the view then
    /// renders the error instead of rows.
    pub criteria_error: Option<String>,
    /// Load failure message shown in the top bar.
    pub status_message: Option<String>,
}

impl ViewState {
    pub fn new(dataset: Dataset) -> Self {
        let mut view = ViewState {
            criteria: FilterCriteria::full_view(&dataset),
            colors: CategoryColors::new(&dataset.categories),
            visible: Vec::new(),
            summary: Summary::NoData { total: 0 },
            criteria_error: None,
            status_message: None,
            dataset,
        };
        view.refilter();
        view
    }

    /// Ingest a newly loaded dataset; criteria are re-derived from its
    /// observed bounds, never carried over from the previous data.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.criteria = FilterCriteria::full_view(&dataset);
        self.colors = CategoryColors::new(&dataset.categories);
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// A load failure leaves the view with an empty, filterable dataset and
    /// a visible message; the engine never sees the error.
    pub fn set_load_failure(&mut self, message: String) {
        let labels = self.dataset.labels.clone();
        self.set_dataset(Dataset::empty(labels));
        self.status_message = Some(message);
    }

    /// Recompute visible indices and summary after any criteria change.
    pub fn refilter(&mut self) {
        match filter(&self.dataset, &self.criteria) {
            Ok(visible) => {
                self.summary = summarize(&self.dataset, &visible);
                self.visible = visible;
                self.criteria_error = None;
            }
            Err(e) => {
                self.visible = Vec::new();
                self.summary = Summary::NoData {
                    total: self.dataset.len(),
                };
                self.criteria_error = Some(e.to_string());
            }
        }
    }

    /// Toggle a single category in the criteria.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.criteria.categories.remove(category) {
            self.criteria.categories.insert(category.to_string());
        }
        self.refilter();
    }

    /// Select every category of the dataset.
    pub fn select_all_categories(&mut self) {
        self.criteria.categories = self.dataset.categories.clone();
        self.refilter();
    }

    /// Deselect all categories (matches nothing).
    pub fn select_no_categories(&mut self) {
        self.criteria.categories = BTreeSet::new();
        self.refilter();
    }

    pub fn set_primary_range(&mut self, min: f64, max: f64) {
        self.criteria.primary_range = (min, max);
        self.refilter();
    }

    pub fn set_cost_ceiling(&mut self, ceiling: f64) {
        self.criteria.cost_ceiling = Some(ceiling);
        self.refilter();
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub protein: ViewState,
    pub security: ViewState,
    pub active: ViewKind,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            protein: ViewState::new(samples::protein_sources()),
            security: ViewState::new(samples::food_security()),
            active: ViewKind::ProteinSources,
        }
    }
}

impl AppState {
    pub fn active_view(&self) -> &ViewState {
        match self.active {
            ViewKind::ProteinSources => &self.protein,
            ViewKind::FoodSecurity => &self.security,
        }
    }

    pub fn active_view_mut(&mut self) -> &mut ViewState {
        match self.active {
            ViewKind::ProteinSources => &mut self.protein,
            ViewKind::FoodSecurity => &mut self.security,
        }
    }
}
