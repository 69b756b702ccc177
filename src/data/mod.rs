/// Data layer: wire encodings, decoding, and loading.
///
/// Architecture:
/// ```text
///  spectrum-query JSON / XIC JSON
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse JSON, detect shape → records
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  decode   │  AxisValues (array | base64 | null) → Vec<f64>, labels
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SeriesDataset  │  Vec<Series>, document kind, time unit
///   └───────────────┘
/// ```

pub mod decode;
pub mod error;
pub mod loader;
pub mod model;
