/// Data layer: core types, loading, condition filtering, and summaries.
///
/// Architecture:
/// ```text
///  per-experiment .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TrialTable (header per group contract)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ TrialTable  │  Vec<Vec<CellValue>>, named columns
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  reward × cue condition → new TrialTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  mean accuracy / median correct RT
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
