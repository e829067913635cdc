use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use super::region::Region;

// ---------------------------------------------------------------------------
// Year – a discrete category, sortable by its numeric value
// ---------------------------------------------------------------------------

/// Grant year as a category.
///
/// Source files write years inconsistently (`2020`, `"2,020"`, `2020.0`), so the
/// text is normalized once at load time and all comparisons go through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Year {
    text: String,
}

impl Year {
    /// Normalize a raw year cell: trim, drop thousands separators, and collapse
    /// whole floats (`2020.0`) to integer text.
    pub fn normalize(raw: &str) -> Self {
        let stripped: String = raw.trim().chars().filter(|&c| c != ',').collect();
        let text = match stripped.parse::<f64>() {
            Ok(v) if v.fract() == 0.0 && v.is_finite() && !stripped.contains(['e', 'E']) => {
                format!("{}", v as i64)
            }
            _ => stripped,
        };
        Year { text }
    }

    pub fn from_number(value: f64) -> Self {
        if value.fract() == 0.0 && value.is_finite() {
            Year {
                text: format!("{}", value as i64),
            }
        } else {
            Year {
                text: value.to_string(),
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric value used for ordering; `None` for text that isn't an integer.
    pub fn numeric(&self) -> Option<i64> {
        self.text.parse().ok()
    }

    /// Chronological order. Non-numeric years sort after every numeric one.
    pub fn chronological(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text.cmp(&other.text),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ---------------------------------------------------------------------------
// ProjectRecord – one row of the registry
// ---------------------------------------------------------------------------

/// A single funded project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub year: Year,
    /// Sponsoring institution; empty when the cell was blank.
    pub institution: String,
    pub title: Option<String>,
    pub country: Option<String>,
    /// One or more leader names, as written in the source.
    pub leaders: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Continent derived from `country`, present only when derivation was requested.
    pub region: Option<Region>,
}

// ---------------------------------------------------------------------------
// ProjectDataset – the complete loaded registry
// ---------------------------------------------------------------------------

/// The loaded registry plus the option lists the filter widgets offer.
///
/// Never mutated after construction; the UI shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ProjectDataset {
    pub records: Vec<ProjectRecord>,
    /// Distinct years, newest first.
    pub year_options: Vec<String>,
    pub institution_options: Vec<String>,
    /// Distinct non-null countries, alphabetical.
    pub country_options: Vec<String>,
    /// Distinct derived regions, alphabetical. Empty when regions weren't derived.
    pub region_options: Vec<String>,
}

impl ProjectDataset {
    /// Build the option lists from the loaded records.
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut years: Vec<&Year> = Vec::new();
        let mut seen_years: BTreeSet<&str> = BTreeSet::new();
        let mut institutions: BTreeSet<String> = BTreeSet::new();
        let mut countries: BTreeSet<String> = BTreeSet::new();
        let mut regions: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            if seen_years.insert(rec.year.as_str()) {
                years.push(&rec.year);
            }
            institutions.insert(rec.institution.clone());
            if let Some(country) = &rec.country {
                countries.insert(country.clone());
            }
            if let Some(region) = rec.region {
                regions.insert(region.to_string());
            }
        }
        years.sort_by(|a, b| b.chronological(a));
        let year_options = years.into_iter().map(|y| y.to_string()).collect();

        ProjectDataset {
            year_options,
            institution_options: institutions.into_iter().collect(),
            country_options: countries.into_iter().collect(),
            region_options: regions.into_iter().collect(),
            records,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(year: &str, institution: &str, country: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            year: Year::normalize(year),
            institution: institution.to_string(),
            title: Some(format!("{institution} project {year}")),
            country: country.map(str::to_string),
            leaders: None,
            latitude: 0.0,
            longitude: 0.0,
            region: None,
        }
    }

    #[test]
    fn year_strips_thousands_separator() {
        assert_eq!(Year::normalize("2,020"), Year::normalize("2020"));
        assert_eq!(Year::normalize(" 2,020 ").as_str(), "2020");
    }

    #[test]
    fn year_collapses_whole_floats() {
        assert_eq!(Year::normalize("2020.0").as_str(), "2020");
        assert_eq!(Year::from_number(2019.0).as_str(), "2019");
        assert_eq!(Year::from_number(2019.5).as_str(), "2019.5");
    }

    #[test]
    fn non_numeric_years_sort_last() {
        let mut years = vec![
            Year::normalize("unknown"),
            Year::normalize("2021"),
            Year::normalize("2,007"),
        ];
        years.sort_by(Year::chronological);
        let texts: Vec<&str> = years.iter().map(Year::as_str).collect();
        assert_eq!(texts, ["2007", "2021", "unknown"]);
    }

    #[test]
    fn option_lists_are_sorted_and_deduplicated() {
        let ds = ProjectDataset::from_records(vec![
            record("2019", "Middlebury", Some("Kenya")),
            record("2,021", "Bates", None),
            record("2020", "Middlebury", Some("Chile")),
            record("2021", "Colby", Some("Kenya")),
        ]);
        assert_eq!(ds.year_options, ["2021", "2020", "2019"]);
        assert_eq!(ds.institution_options, ["Bates", "Colby", "Middlebury"]);
        assert_eq!(ds.country_options, ["Chile", "Kenya"]);
        assert!(ds.region_options.is_empty());
    }
}
