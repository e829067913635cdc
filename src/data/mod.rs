/// Data layer: core types, loading, region lookup, filtering, and the ledger.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐      ┌────────┐
///   │  loader   │ ───▶ │ region │  country → continent (optional)
///   └──────────┘      └────────┘
///        │  DatasetCache memoizes by (path, options)
///        ▼
///   ┌────────────────┐
///   │ ProjectDataset │  Vec<ProjectRecord>, option lists
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  criteria → ProjectView (indices) + Summary
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  ledger   │  five display columns, CSV export
///   └──────────┘
/// ```

mod countries;
pub mod filter;
pub mod ledger;
pub mod loader;
pub mod model;
pub mod region;
