/// Data layer: core types, loading, and chart derivation.
///
/// Architecture:
/// ```text
///   launch CSV
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site/booster indices
///   └───────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  aggregate → PieSpec, filter → ScatterSpec
///   └───────────┘
/// ```
pub mod loader;
pub mod model;
pub mod transform;
