use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::color::ColorMap;
use crate::config::Config;
use crate::data::filter::{FilterCriteria, LocationField, ProjectView, Summary};
use crate::data::ledger;
use crate::data::loader::DatasetCache;
use crate::data::model::ProjectDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which multi-select list a toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Year,
    Institution,
    Location,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    cache: DatasetCache,

    /// Loaded registry (None until a load succeeds).
    pub dataset: Option<Arc<ProjectDataset>>,

    /// File the current dataset came from.
    pub source: Option<PathBuf>,

    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria, in dataset order.
    pub visible_indices: Vec<usize>,

    pub summary: Summary,

    /// Year → colour, in chronological legend order.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let criteria = FilterCriteria {
            location_field: config.location_filter,
            search_scope: config.search_scope(),
            ..Default::default()
        };
        Self {
            config,
            cache: DatasetCache::new(),
            dataset: None,
            source: None,
            criteria,
            visible_indices: Vec::new(),
            summary: Summary::default(),
            color_map: None,
            status_message: None,
        }
    }

    /// Load (or fetch from cache) the registry at `path` and make it current.
    /// On failure the previous dataset stays in place.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let dataset = self.cache.get_or_load(path, self.config.load_options())?;
        self.source = Some(path.to_path_buf());
        self.set_dataset(dataset);
        Ok(())
    }

    /// Drop the cached copy of the current file and read it again.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.source.clone() else {
            return Ok(());
        };
        if self.cache.invalidate(&path) {
            log::info!("Invalidated cached dataset for {}", path.display());
        }
        self.load(&path)
    }

    /// Ingest a newly loaded dataset, initialise criteria and colours.
    pub fn set_dataset(&mut self, dataset: Arc<ProjectDataset>) {
        self.criteria = FilterCriteria {
            location_field: self.criteria.location_field,
            search_scope: self.criteria.search_scope,
            ..FilterCriteria::all_years(&dataset)
        };
        // Legend runs oldest → newest; the year selector lists newest first.
        self.color_map = Some(ColorMap::new(dataset.year_options.iter().rev()));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and the summary after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            let view = ProjectView::new(ds, &self.criteria);
            self.summary = Summary::of(&view);
            self.visible_indices = view.indices;
        }
    }

    /// The current filtered view.
    pub fn view(&self) -> Option<ProjectView<'_>> {
        self.dataset
            .as_deref()
            .map(|ds| ProjectView::from_indices(ds, self.visible_indices.clone()))
    }

    /// Values offered by a selector.
    pub fn options(&self, selector: Selector) -> &[String] {
        let Some(ds) = self.dataset.as_deref() else {
            return &[];
        };
        match selector {
            Selector::Year => &ds.year_options,
            Selector::Institution => &ds.institution_options,
            Selector::Location => match self.criteria.location_field {
                LocationField::Country => &ds.country_options,
                LocationField::Region => &ds.region_options,
            },
        }
    }

    pub fn selection(&self, selector: Selector) -> &BTreeSet<String> {
        match selector {
            Selector::Year => &self.criteria.years,
            Selector::Institution => &self.criteria.institutions,
            Selector::Location => &self.criteria.locations,
        }
    }

    fn selection_mut(&mut self, selector: Selector) -> &mut BTreeSet<String> {
        match selector {
            Selector::Year => &mut self.criteria.years,
            Selector::Institution => &mut self.criteria.institutions,
            Selector::Location => &mut self.criteria.locations,
        }
    }

    /// Toggle a single value in a selector.
    pub fn toggle(&mut self, selector: Selector, value: &str) {
        let selected = self.selection_mut(selector);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every value a selector offers.
    pub fn select_all(&mut self, selector: Selector) {
        let all: BTreeSet<String> = self.options(selector).iter().cloned().collect();
        *self.selection_mut(selector) = all;
        self.refilter();
    }

    /// Clear a selector. For years this hides everything; for the others it
    /// lifts the restriction.
    pub fn select_none(&mut self, selector: Selector) {
        self.selection_mut(selector).clear();
        self.refilter();
    }

    pub fn set_search(&mut self, query: &str) {
        if self.criteria.search != query {
            self.criteria.search = query.to_string();
            self.refilter();
        }
    }

    /// Write the visible ledger to `path`, in the order the ledger table shows it.
    pub fn export_ledger(&self, path: &Path) -> Result<()> {
        match self.view() {
            Some(view) => ledger::export_ledger(&view.sorted_by_year(), path),
            None => anyhow::bail!("No dataset loaded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::data::loader::tests::{write_fixture, SCENARIO_CSV};

    fn state_with(args: &[&str]) -> (AppState, tempfile::NamedTempFile) {
        let file = write_fixture(".csv", SCENARIO_CSV);
        let mut argv = vec!["peace-atlas"];
        argv.extend_from_slice(args);
        let mut state = AppState::new(Config::try_parse_from(argv).unwrap());
        state.load(file.path()).unwrap();
        (state, file)
    }

    #[test]
    fn load_selects_every_year() {
        let (state, _file) = state_with(&[]);
        assert_eq!(state.visible_indices, [0, 1]);
        assert_eq!(state.summary.projects, 2);
        assert_eq!(state.options(Selector::Year), ["2020", "2019"]);
        // Oldest year takes the first hue.
        let cm = state.color_map.as_ref().unwrap();
        assert_eq!(cm.color_for("2019"), crate::color::generate_palette(2)[0]);
    }

    #[test]
    fn toggles_narrow_and_restore() {
        let (mut state, _file) = state_with(&[]);
        state.toggle(Selector::Year, "2019");
        assert_eq!(state.visible_indices, [1]);
        state.toggle(Selector::Year, "2019");
        assert_eq!(state.visible_indices, [0, 1]);

        state.toggle(Selector::Location, "Kenya");
        assert_eq!(state.visible_indices, [0]);
        state.select_none(Selector::Location);
        assert_eq!(state.visible_indices, [0, 1]);

        state.select_none(Selector::Year);
        assert!(state.visible_indices.is_empty());
        state.select_all(Selector::Year);
        assert_eq!(state.visible_indices, [0, 1]);
    }

    #[test]
    fn search_updates_summary() {
        let (mut state, _file) = state_with(&[]);
        state.set_search("ROE");
        assert_eq!(state.visible_indices, [1]);
        assert_eq!(state.summary.nations, 1);
        state.set_search("");
        assert_eq!(state.summary.projects, 2);
    }

    #[test]
    fn region_mode_offers_continents() {
        let (mut state, _file) = state_with(&["--location-filter", "region"]);
        assert_eq!(state.options(Selector::Location), ["Africa", "Asia"]);
        state.toggle(Selector::Location, "Asia");
        assert_eq!(state.visible_indices, [1]);
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let (mut state, file) = state_with(&[]);
        assert!(state.load(Path::new("no/such/registry.csv")).is_err());
        assert_eq!(state.source.as_deref(), Some(file.path()));
        assert_eq!(state.dataset.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn reload_rereads_the_file() {
        let (mut state, file) = state_with(&[]);
        let before = Arc::clone(state.dataset.as_ref().unwrap());
        std::fs::write(
            file.path(),
            "Year,Institution,Project Title,Project Country,Project Leader(s),Latitude,Longitude\n2024,C,New,Chile,Eve,1,1\n",
        )
        .unwrap();
        state.reload().unwrap();
        let after = state.dataset.as_ref().unwrap();
        assert!(!Arc::ptr_eq(&before, after));
        assert_eq!(after.len(), 1);
        assert_eq!(state.options(Selector::Year), ["2024"]);
    }

    #[test]
    fn export_follows_ledger_order() {
        let file = write_fixture(
            ".csv",
            "Year,Institution,Project Title,Project Country,Project Leader(s),Latitude,Longitude\n\
             2021,A,Newer,Kenya,Jane,0,0\n\
             2008,B,Older,Peru,Sam,1,1\n",
        );
        let mut state = AppState::new(Config::try_parse_from(["peace-atlas"]).unwrap());
        state.load(file.path()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ledger.csv");
        state.export_ledger(&out).unwrap();

        let mut reader = csv::Reader::from_path(&out).unwrap();
        let titles: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[2].to_string())
            .collect();
        assert_eq!(titles, ["Older", "Newer"]);
    }

    #[test]
    fn export_without_dataset_fails() {
        let state = AppState::new(Config::try_parse_from(["peace-atlas"]).unwrap());
        let dir = tempfile::tempdir().unwrap();
        assert!(state.export_ledger(&dir.path().join("ledger.csv")).is_err());
    }
}
