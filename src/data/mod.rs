/// Data layer: documents, counting, and percentages.
///
/// Architecture:
/// ```text
///  export_job_xxxx/<doc>/<key>.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read one .txt per folder → Corpus
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  tally    │  letters / digits / others → SignCounts
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ percentage │  case-folded shares, reference comparison
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod percentage;
pub mod tally;
