//! Decoding and plotting support for spectrum-query and XIC JSON exports.

pub mod color;
pub mod data;

pub use data::decode::{decode_packed, decode_series, encode_packed, spectrum_label};
pub use data::error::DecodeError;
pub use data::loader::{load_file, parse_document};
pub use data::model::{DocumentKind, Series, SeriesDataset};
