use base64::{engine::general_purpose, Engine as _};
use serde_json::Value as JsonValue;

use super::error::DecodeError;
use super::model::{Attribute, AxisValues, TraceMeta};

/// PSI-MS "scan number".
pub const SCAN_NUMBER_ACCESSION: &str = "MS:1003057";
/// Scan-number code matched by the older plotting scripts; still accepted.
pub const LEGACY_SCAN_NUMBER_ACCESSION: &str = "MS:10003057";
/// PSI-MS "ms level".
pub const MS_LEVEL_ACCESSION: &str = "MS:1000511";

const F64_WIDTH: usize = std::mem::size_of::<f64>();

// ---------------------------------------------------------------------------
// Packed binary arrays
// ---------------------------------------------------------------------------

/// Encode doubles as base64 of their little-endian bytes.
pub fn encode_packed(values: &[f64]) -> String {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 text of contiguous little-endian doubles.
///
/// `field` only names the source in errors. A trailing partial value is
/// rejected rather than dropped.
pub fn decode_packed(field: &str, text: &str) -> Result<Vec<f64>, DecodeError> {
    let bytes = general_purpose::STANDARD
        .decode(text)
        .map_err(|source| DecodeError::InvalidBase64 {
            field: field.to_string(),
            source,
        })?;

    if bytes.len() % F64_WIDTH != 0 {
        return Err(DecodeError::Misaligned {
            field: field.to_string(),
            len: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(F64_WIDTH)
        .map(|chunk| {
            let mut buffer = [0u8; F64_WIDTH];
            buffer.copy_from_slice(chunk);
            f64::from_le_bytes(buffer)
        })
        .collect())
}

// ---------------------------------------------------------------------------
// AxisValues classification / resolution
// ---------------------------------------------------------------------------

impl AxisValues {
    /// Classify a raw JSON value.
    pub fn from_json(field: &str, value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::String(s) => Ok(AxisValues::Packed(s.clone())),
            JsonValue::Array(_) => serde_json::from_value::<Vec<f64>>(value.clone())
                .map(AxisValues::Numeric)
                .map_err(|e| DecodeError::InvalidValue {
                    field: field.to_string(),
                    source: Some(e),
                }),
            JsonValue::Null => Ok(AxisValues::Empty),
            _ => Err(DecodeError::InvalidValue {
                field: field.to_string(),
                source: None,
            }),
        }
    }

    /// Turn the wire form into plain doubles.
    pub fn resolve(self, field: &str) -> Result<Vec<f64>, DecodeError> {
        match self {
            AxisValues::Numeric(values) => Ok(values),
            AxisValues::Packed(text) => decode_packed(field, &text),
            AxisValues::Empty => Ok(Vec::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// Series decoder
// ---------------------------------------------------------------------------

/// Decode the two axis fields of one record into `(x, y)`.
///
/// Both fields must use the same encoding (a `null` pairs with either).
/// The returned vectors always have equal length.
pub fn decode_series(
    record: &JsonValue,
    x_key: &str,
    y_key: &str,
) -> Result<(Vec<f64>, Vec<f64>), DecodeError> {
    let obj = record.as_object().ok_or(DecodeError::NotAnObject)?;

    let field = |key: &str| {
        obj.get(key)
            .ok_or_else(|| DecodeError::MissingField(key.to_string()))
            .and_then(|v| AxisValues::from_json(key, v))
    };
    let x_raw = field(x_key)?;
    let y_raw = field(y_key)?;

    if matches!(
        (&x_raw, &y_raw),
        (AxisValues::Packed(_), AxisValues::Numeric(_))
            | (AxisValues::Numeric(_), AxisValues::Packed(_))
    ) {
        return Err(DecodeError::MixedEncoding {
            x_field: x_key.to_string(),
            y_field: y_key.to_string(),
        });
    }

    let x = x_raw.resolve(x_key)?;
    let y = y_raw.resolve(y_key)?;

    if x.len() != y.len() {
        return Err(DecodeError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok((x, y))
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Legend label for a spectrum, e.g. `scan #12, MS Level 2`.
pub fn spectrum_label(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .filter_map(|attr| match attr.accession.as_deref()? {
            SCAN_NUMBER_ACCESSION | LEGACY_SCAN_NUMBER_ACCESSION => {
                Some(format!("scan #{}", attr.value_text()))
            }
            MS_LEVEL_ACCESSION => Some(format!("MS Level {}", attr.value_text())),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hover label for an XIC trace built from its requested window.
pub fn trace_label(meta: &TraceMeta) -> String {
    let mut parts = Vec::new();
    if let Some(range) = format_range(meta.mz_start, meta.mz_end, 4) {
        parts.push(format!("m/z {range}"));
    }
    if let Some(range) = format_range(meta.rt_start, meta.rt_end, 2) {
        parts.push(format!("RT {range}"));
    }
    if let Some(filter) = meta.filter.as_deref().filter(|f| !f.is_empty()) {
        parts.push(filter.to_string());
    }
    parts.join(", ")
}

fn format_range(start: f64, end: f64, precision: usize) -> Option<String> {
    let bound = |v: f64| {
        if v < 0.0 {
            "*".to_string()
        } else {
            format!("{v:.precision$}")
        }
    };
    if start < 0.0 && end < 0.0 {
        return None;
    }
    Some(format!("{}-{}", bound(start), bound(end)))
}
