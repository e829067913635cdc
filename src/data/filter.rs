use std::collections::BTreeSet;

use super::model::{ProjectDataset, ProjectRecord};

// ---------------------------------------------------------------------------
// Criteria: the active selections of the filter panel
// ---------------------------------------------------------------------------

/// Which attribute the location selector filters on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LocationField {
    #[default]
    Country,
    Region,
}

/// Which text fields the keyword search looks into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    TitleAndLeaders,
    TitleLeadersAndCountry,
}

/// The combination of filter selections at a given moment.
///
/// Empty sets don't all mean the same thing:
/// * `years` empty → nothing matches
/// * `institutions` / `locations` empty → no restriction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub years: BTreeSet<String>,
    pub institutions: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub location_field: LocationField,
    /// Case-insensitive literal substring; empty disables the search.
    pub search: String,
    pub search_scope: SearchScope,
}

impl FilterCriteria {
    /// Every year selected, no other restriction.
    pub fn all_years(dataset: &ProjectDataset) -> Self {
        FilterCriteria {
            years: dataset.year_options.iter().cloned().collect(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Return indices of records that pass all criteria, in dataset order.
///
/// Each active criterion narrows the survivors of the previous one:
/// year, institution, location, then keyword search.
pub fn filter_indices(dataset: &ProjectDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let records = &dataset.records;
    let mut indices: Vec<usize> = (0..records.len())
        .filter(|&i| criteria.years.contains(records[i].year.as_str()))
        .collect();

    if !criteria.institutions.is_empty() {
        indices.retain(|&i| criteria.institutions.contains(&records[i].institution));
    }

    if !criteria.locations.is_empty() {
        indices.retain(|&i| {
            location_of(&records[i], criteria.location_field)
                .is_some_and(|loc| criteria.locations.contains(loc))
        });
    }

    if !criteria.search.is_empty() {
        let needle = criteria.search.to_lowercase();
        indices.retain(|&i| matches_search(&records[i], &needle, criteria.search_scope));
    }

    indices
}

fn location_of(record: &ProjectRecord, field: LocationField) -> Option<&str> {
    match field {
        LocationField::Country => record.country.as_deref(),
        LocationField::Region => record.region.map(|r| r.name()),
    }
}

/// `needle` must already be lowercase. Null fields never match.
fn matches_search(record: &ProjectRecord, needle: &str, scope: SearchScope) -> bool {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    };
    contains(&record.title)
        || contains(&record.leaders)
        || (scope == SearchScope::TitleLeadersAndCountry && contains(&record.country))
}

// ---------------------------------------------------------------------------
// ProjectView – a filtered, non-owning view of the dataset
// ---------------------------------------------------------------------------

/// Indices into a borrowed dataset.
#[derive(Debug, Clone)]
pub struct ProjectView<'a> {
    pub dataset: &'a ProjectDataset,
    pub indices: Vec<usize>,
}

impl<'a> ProjectView<'a> {
    pub fn new(dataset: &'a ProjectDataset, criteria: &FilterCriteria) -> Self {
        ProjectView {
            dataset,
            indices: filter_indices(dataset, criteria),
        }
    }

    /// Wrap indices computed earlier.
    pub fn from_indices(dataset: &'a ProjectDataset, indices: Vec<usize>) -> Self {
        ProjectView { dataset, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a ProjectRecord> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }

    /// Stable re-order by ascending year so a year legend reads chronologically.
    pub fn sorted_by_year(&self) -> ProjectView<'a> {
        let mut indices = self.indices.clone();
        let records = &self.dataset.records;
        indices.sort_by(|&a, &b| records[a].year.chronological(&records[b].year));
        ProjectView {
            dataset: self.dataset,
            indices,
        }
    }
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Headline counts for the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub projects: usize,
    /// Distinct non-null project countries.
    pub nations: usize,
    pub institutions: usize,
}

impl Summary {
    pub fn of(view: &ProjectView<'_>) -> Self {
        let mut nations = BTreeSet::new();
        let mut institutions = BTreeSet::new();
        for rec in view.records() {
            if let Some(country) = &rec.country {
                nations.insert(country.as_str());
            }
            if !rec.institution.is_empty() {
                institutions.insert(rec.institution.as_str());
            }
        }
        Summary {
            projects: view.len(),
            nations: nations.len(),
            institutions: institutions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::tests::{write_fixture, SCENARIO_CSV};
    use crate::data::loader::{load_file, LoadOptions};
    use crate::data::model::tests::record;
    use crate::data::region::Region;

    fn scenario() -> ProjectDataset {
        let file = write_fixture(".csv", SCENARIO_CSV);
        load_file(file.path(), LoadOptions { derive_regions: true }).unwrap()
    }

    fn registry() -> ProjectDataset {
        let mut rows = vec![
            record("2021", "Middlebury", Some("Kenya")),
            record("2008", "Bates", Some("Peru")),
            record("2,015", "Colby", None),
            record("2015", "Middlebury", Some("Nepal")),
            record("2008", "Colby", Some("Kenya")),
        ];
        rows[0].leaders = Some("Amina Otieno".into());
        rows[1].title = None;
        rows[1].leaders = Some("Lucía Quispe, Sam Park".into());
        rows[3].region = Some(Region::Asia);
        rows[4].region = Some(Region::Africa);
        ProjectDataset::from_records(rows)
    }

    #[test]
    fn scenario_year_filter() {
        let ds = scenario();
        let criteria = FilterCriteria {
            years: ["2020".to_string()].into(),
            ..Default::default()
        };
        let view = ProjectView::new(&ds, &criteria);
        assert_eq!(view.indices, [1]);
        let rec = view.records().next().unwrap();
        assert_eq!(rec.leaders.as_deref(), Some("John Roe"));
        assert_eq!(rec.region, Some(Region::Asia));
    }

    #[test]
    fn scenario_case_insensitive_search() {
        let ds = scenario();
        let criteria = FilterCriteria {
            search: "jane".into(),
            ..FilterCriteria::all_years(&ds)
        };
        assert_eq!(filter_indices(&ds, &criteria), [0]);
    }

    #[test]
    fn empty_year_selection_matches_nothing() {
        let ds = registry();
        assert!(filter_indices(&ds, &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn normalized_years_filter_together() {
        let ds = registry();
        let criteria = FilterCriteria {
            years: ["2015".to_string()].into(),
            ..Default::default()
        };
        assert_eq!(filter_indices(&ds, &criteria), [2, 3]);
    }

    #[test]
    fn empty_sets_equal_no_filter() {
        let ds = registry();
        let all = FilterCriteria::all_years(&ds);
        let expected: Vec<usize> = (0..ds.len()).collect();
        assert_eq!(filter_indices(&ds, &all), expected);

        let explicit_empty = FilterCriteria {
            institutions: BTreeSet::new(),
            locations: BTreeSet::new(),
            location_field: LocationField::Region,
            ..all.clone()
        };
        assert_eq!(filter_indices(&ds, &explicit_empty), expected);
    }

    #[test]
    fn institution_and_country_combine_with_and() {
        let ds = registry();
        let criteria = FilterCriteria {
            institutions: ["Middlebury".to_string(), "Colby".to_string()].into(),
            locations: ["Kenya".to_string()].into(),
            ..FilterCriteria::all_years(&ds)
        };
        assert_eq!(filter_indices(&ds, &criteria), [0, 4]);
    }

    #[test]
    fn null_country_never_matches_location() {
        let ds = registry();
        let criteria = FilterCriteria {
            institutions: ["Colby".to_string()].into(),
            locations: ["Kenya".to_string(), "Peru".to_string()].into(),
            ..FilterCriteria::all_years(&ds)
        };
        assert_eq!(filter_indices(&ds, &criteria), [4]);
    }

    #[test]
    fn region_field_filters_on_derived_region() {
        let ds = registry();
        let criteria = FilterCriteria {
            locations: ["Asia".to_string()].into(),
            location_field: LocationField::Region,
            ..FilterCriteria::all_years(&ds)
        };
        assert_eq!(filter_indices(&ds, &criteria), [3]);
    }

    #[test]
    fn search_covers_leaders_and_skips_nulls() {
        let ds = registry();
        let criteria = FilterCriteria {
            search: "QUISPE".into(),
            ..FilterCriteria::all_years(&ds)
        };
        assert_eq!(filter_indices(&ds, &criteria), [1]);
    }

    #[test]
    fn search_scope_controls_country_matching() {
        let ds = registry();
        let mut criteria = FilterCriteria {
            search: "nepal".into(),
            ..FilterCriteria::all_years(&ds)
        };
        assert!(filter_indices(&ds, &criteria).is_empty());

        criteria.search_scope = SearchScope::TitleLeadersAndCountry;
        assert_eq!(filter_indices(&ds, &criteria), [3]);
    }

    #[test]
    fn search_is_literal_not_a_pattern() {
        let ds = registry();
        let criteria = FilterCriteria {
            search: "m.ddlebury".into(),
            ..FilterCriteria::all_years(&ds)
        };
        assert!(filter_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_a_subset() {
        let ds = registry();
        let criteria = FilterCriteria {
            institutions: ["Colby".to_string(), "Bates".to_string()].into(),
            search: "o".into(),
            ..FilterCriteria::all_years(&ds)
        };
        let first = filter_indices(&ds, &criteria);
        let second = filter_indices(&ds, &criteria);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert!(first.iter().all(|&i| i < ds.len()));
    }

    #[test]
    fn sorted_by_year_is_ascending_and_stable() {
        let ds = registry();
        let view = ProjectView::new(&ds, &FilterCriteria::all_years(&ds));
        let sorted = view.sorted_by_year();
        assert_eq!(sorted.indices, [1, 4, 2, 3, 0]);
        assert_eq!(view.indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn summary_counts_distinct_values() {
        let ds = registry();
        let view = ProjectView::new(&ds, &FilterCriteria::all_years(&ds));
        assert_eq!(
            Summary::of(&view),
            Summary {
                projects: 5,
                nations: 3,
                institutions: 3,
            }
        );

        let none = ProjectView::from_indices(&ds, Vec::new());
        assert_eq!(Summary::of(&none), Summary::default());
    }
}
