use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{LocationField, SearchScope};
use crate::data::loader::LoadOptions;

/// Registry file read when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "projects_for_peace_master_2007_2025_with_lonlat.csv";

/// Command line options.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Explore the Projects for Peace grants registry")]
pub struct Config {
    /// Registry file (.csv, .json or .parquet)
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Filter locations by project country or by derived continent
    #[arg(long, value_enum, default_value_t = LocationField::Country)]
    pub location_filter: LocationField,

    /// Let the keyword search match project countries as well
    #[arg(long)]
    pub search_country: bool,
}

impl Config {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            derive_regions: self.location_filter == LocationField::Region,
        }
    }

    pub fn search_scope(&self) -> SearchScope {
        if self.search_country {
            SearchScope::TitleLeadersAndCountry
        } else {
            SearchScope::TitleAndLeaders
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_registry_file() {
        let config = Config::try_parse_from(["peace-atlas"]).unwrap();
        assert_eq!(config.data, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.location_filter, LocationField::Country);
        assert!(!config.load_options().derive_regions);
        assert_eq!(config.search_scope(), SearchScope::TitleAndLeaders);
    }

    #[test]
    fn region_filter_turns_on_derivation() {
        let config = Config::try_parse_from([
            "peace-atlas",
            "grants.parquet",
            "--location-filter",
            "region",
            "--search-country",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("grants.parquet"));
        assert!(config.load_options().derive_regions);
        assert_eq!(config.search_scope(), SearchScope::TitleLeadersAndCountry);
    }
}
