use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use super::countries::COUNTRIES;

// ---------------------------------------------------------------------------
// Region – continent-level grouping of a project country
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
    /// Country missing, unknown, or not attached to a continent.
    Other,
}

impl Region {
    pub fn name(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
            Region::Antarctica => "Antarctica",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Lookup result
// ---------------------------------------------------------------------------

/// Outcome of resolving a country name to its continent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLookup {
    /// Matched one of the manual overrides for territories the ISO table lacks.
    Override(Region),
    /// Matched the country table through its alpha-2 code.
    Resolved { code: &'static str, region: Region },
    /// Null, unknown, or ambiguous name.
    Unresolved,
}

impl RegionLookup {
    /// The region to display; unresolved names fall into [`Region::Other`].
    pub fn region(self) -> Region {
        match self {
            RegionLookup::Override(region) | RegionLookup::Resolved { region, .. } => region,
            RegionLookup::Unresolved => Region::Other,
        }
    }
}

/// Disputed or partially recognised territories, checked before the table.
const OVERRIDES: &[(&str, Region)] = &[("palestine", Region::Asia), ("kosovo", Region::Europe)];

/// Resolve a project country to its continent.
pub fn resolve_region(country: Option<&str>) -> RegionLookup {
    let Some(country) = country else {
        return RegionLookup::Unresolved;
    };
    let key = name_key(country);
    if key.is_empty() {
        return RegionLookup::Unresolved;
    }

    if let Some(&(_, region)) = OVERRIDES.iter().find(|(name, _)| *name == key) {
        return RegionLookup::Override(region);
    }

    match name_index().get(key.as_str()) {
        Some(&(code, region)) => RegionLookup::Resolved { code, region },
        None => RegionLookup::Unresolved,
    }
}

// ---------------------------------------------------------------------------
// Index over the static country table
// ---------------------------------------------------------------------------

/// Lowercase, trim, and collapse runs of whitespace.
fn name_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalised country name → (alpha-2 code, continent).
fn name_index() -> &'static HashMap<String, (&'static str, Region)> {
    static INDEX: OnceLock<HashMap<String, (&'static str, Region)>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::new();
        for &(code, region, names) in COUNTRIES {
            for name in names {
                index.insert(name_key(name), (code, region));
            }
        }
        index
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_precede_table() {
        assert_eq!(resolve_region(Some("Palestine")), RegionLookup::Override(Region::Asia));
        assert_eq!(resolve_region(Some("Kosovo")).region(), Region::Europe);
        assert_eq!(resolve_region(Some("  kosovo ")).region(), Region::Europe);
    }

    #[test]
    fn common_and_official_names_resolve() {
        assert_eq!(
            resolve_region(Some("Kenya")),
            RegionLookup::Resolved {
                code: "KE",
                region: Region::Africa
            }
        );
        assert_eq!(resolve_region(Some("Viet Nam")).region(), Region::Asia);
        assert_eq!(resolve_region(Some("vietnam")).region(), Region::Asia);
        assert_eq!(resolve_region(Some("United States")).region(), Region::NorthAmerica);
        assert_eq!(resolve_region(Some("Bolivia")).region(), Region::SouthAmerica);
        assert_eq!(resolve_region(Some("Papua New Guinea")).region(), Region::Oceania);
        assert_eq!(resolve_region(Some("Bosnia and  Herzegovina")).region(), Region::Europe);
    }

    #[test]
    fn unknown_and_null_fall_back_to_other() {
        let unknown = resolve_region(Some("Atlantis"));
        assert_eq!(unknown, RegionLookup::Unresolved);
        assert_eq!(unknown.region(), Region::Other);
        assert_eq!(resolve_region(None).region(), Region::Other);
        assert_eq!(resolve_region(Some("   ")).region(), Region::Other);
    }

    #[test]
    fn every_table_name_resolves_to_its_row() {
        for &(code, region, names) in COUNTRIES {
            assert_eq!(code.len(), 2, "{code}");
            assert!(!names.is_empty(), "{code} has no names");
            for &name in names {
                if OVERRIDES.iter().any(|(o, _)| *o == name_key(name)) {
                    continue;
                }
                assert_eq!(
                    resolve_region(Some(name)),
                    RegionLookup::Resolved { code, region },
                    "{name}"
                );
            }
        }
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
    }
}
