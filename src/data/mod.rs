/// Data layer: catalog model, loading and cleaning, filtering, aggregation,
/// export.
///
/// ```text
///   data/netflix1.csv
///         │
///         ▼
///    ┌──────────┐
///    │  loader   │  read CSV → dedup → sentinels → derived fields
///    └──────────┘
///         │
///         ▼
///    ┌──────────────┐
///    │ CatalogTable  │  Vec<CatalogRow>, distinct-value sets
///    └──────────────┘
///         │
///         ▼
///    ┌──────────┐      ┌────────────┐      ┌──────────┐
///    │  filter   │  →   │ aggregate  │      │  export   │
///    └──────────┘      └────────────┘      └──────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
