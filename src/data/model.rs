use serde::Deserialize;
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// AxisValues – one axis field as it appears on the wire
// ---------------------------------------------------------------------------

/// The supported encodings of an axis field (`mzs`, `intensities`, `X`, `Y`).
///
/// Classified once when a record is read so the rest of the pipeline only
/// ever sees `Vec<f64>`.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValues {
    /// Literal JSON number array.
    Numeric(Vec<f64>),
    /// Base64 text of contiguous little-endian `f64` values.
    Packed(String),
    /// JSON `null`; written by the exporter for traces without scans.
    Empty,
}

// ---------------------------------------------------------------------------
// Attribute – a controlled-vocabulary term attached to a spectrum
// ---------------------------------------------------------------------------

/// One entry of a spectrum's `attributes` list.
///
/// Only `accession` and `value` matter here; `name`, `cvGroup` and friends
/// are skipped by serde.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub accession: Option<String>,
    #[serde(default)]
    pub value: Option<JsonValue>,
}

impl Attribute {
    /// Term with a string value, as the spectrum-query exporter writes them.
    pub fn new(accession: &str, value: &str) -> Self {
        Attribute {
            accession: Some(accession.to_string()),
            value: Some(JsonValue::String(value.to_string())),
        }
    }

    /// Value rendered for display: strings without quotes, anything else as JSON text.
    pub fn value_text(&self) -> String {
        match &self.value {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Trace metadata (XIC output)
// ---------------------------------------------------------------------------

/// Per-trace `Meta` block. Negative bounds mean "not set".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TraceMeta {
    #[serde(default = "unset_bound")]
    pub mz_start: f64,
    #[serde(default = "unset_bound")]
    pub mz_end: f64,
    #[serde(default = "unset_bound")]
    pub rt_start: f64,
    #[serde(default = "unset_bound")]
    pub rt_end: f64,
    #[serde(default)]
    pub filter: Option<String>,
}

fn unset_bound() -> f64 {
    -1.0
}

impl Default for TraceMeta {
    fn default() -> Self {
        TraceMeta {
            mz_start: unset_bound(),
            mz_end: unset_bound(),
            rt_start: unset_bound(),
            rt_end: unset_bound(),
            filter: None,
        }
    }
}

/// Document-level `OutputMeta` block of the XIC output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputMeta {
    #[serde(default)]
    pub base64: bool,
    #[serde(default)]
    pub timeunit: String,
}

// ---------------------------------------------------------------------------
// Series / SeriesDataset – what the viewer draws
// ---------------------------------------------------------------------------

/// One decoded line: x and y of equal length plus a display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// May be empty.
    pub label: String,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Which of the two document shapes was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Top-level array of spectrum records (`mzs` / `intensities`).
    Spectra,
    /// Object whose `content` holds chromatogram traces (`X` / `Y`).
    Traces,
}

impl DocumentKind {
    /// Field names holding the x and y axes for this shape.
    pub fn axis_keys(self) -> (&'static str, &'static str) {
        match self {
            DocumentKind::Spectra => ("mzs", "intensities"),
            DocumentKind::Traces => ("X", "Y"),
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            DocumentKind::Spectra => "spectra",
            DocumentKind::Traces => "traces",
        }
    }
}

/// All series of one input file, in document order.
#[derive(Debug, Clone)]
pub struct SeriesDataset {
    pub kind: DocumentKind,
    pub series: Vec<Series>,
    /// Time unit of the x axis (traces only, when the exporter recorded one).
    pub time_unit: Option<String>,
}

impl SeriesDataset {
    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of points over all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}
