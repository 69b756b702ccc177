use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::decode::{decode_series, spectrum_label, trace_label};
use super::model::{Attribute, DocumentKind, OutputMeta, Series, SeriesDataset, TraceMeta};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and decode a spectrum-query or XIC JSON export.
pub fn load_file(path: &Path) -> Result<SeriesDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_document(&text).with_context(|| format!("loading {}", path.display()))
}

/// Decode a JSON document of either supported shape.
///
/// ```json
/// [ { "mzs": [...], "intensities": [...], "attributes": [...] }, ... ]
/// ```
/// or
/// ```json
/// { "OutputMeta": { "base64": true, "timeunit": "minutes" },
///   "content": [ { "Meta": {...}, "X": "...", "Y": "..." }, ... ] }
/// ```
pub fn parse_document(text: &str) -> Result<SeriesDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let dataset = match &root {
        JsonValue::Array(records) => load_spectra(records)?,
        JsonValue::Object(obj) => {
            let content = obj
                .get("content")
                .or_else(|| obj.get("Content"))
                .context("expected a top-level array of spectra or an object with 'content'")?
                .as_array()
                .context("'content' is not an array")?;
            let output_meta = obj
                .get("OutputMeta")
                .or_else(|| obj.get("outputmeta"))
                .map(|v| serde_json::from_value::<OutputMeta>(v.clone()))
                .transpose()
                .context("invalid OutputMeta")?;
            load_traces(content, output_meta)?
        }
        _ => bail!("expected a top-level array of spectra or an object with 'content'"),
    };

    if dataset.is_empty() {
        log::warn!("document contains no {}", dataset.kind.noun());
    }
    log::info!(
        "decoded {} {} ({} points)",
        dataset.len(),
        dataset.kind.noun(),
        dataset.point_count()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Spectrum form
// ---------------------------------------------------------------------------

fn load_spectra(records: &[JsonValue]) -> Result<SeriesDataset> {
    let (x_key, y_key) = DocumentKind::Spectra.axis_keys();
    let mut series = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let (x, y) = decode_series(rec, x_key, y_key).with_context(|| format!("record {i}"))?;

        let attributes: Vec<Attribute> = match rec.get("attributes") {
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("record {i}: invalid 'attributes'"))?,
            None => Vec::new(),
        };
        let label = spectrum_label(&attributes);

        log::debug!("spectrum {i}: {} points, label '{label}'", x.len());
        series.push(Series { x, y, label });
    }

    Ok(SeriesDataset {
        kind: DocumentKind::Spectra,
        series,
        time_unit: None,
    })
}

// ---------------------------------------------------------------------------
// Trace (XIC) form
// ---------------------------------------------------------------------------

fn load_traces(records: &[JsonValue], output_meta: Option<OutputMeta>) -> Result<SeriesDataset> {
    let (x_key, y_key) = DocumentKind::Traces.axis_keys();
    let mut series = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let (x, y) = decode_series(rec, x_key, y_key).with_context(|| format!("record {i}"))?;

        let meta: TraceMeta = match rec.get("Meta").or_else(|| rec.get("meta")) {
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("record {i}: invalid 'Meta'"))?,
            None => TraceMeta::default(),
        };
        let label = trace_label(&meta);

        log::debug!("trace {i}: {} points, label '{label}'", x.len());
        series.push(Series { x, y, label });
    }

    if let Some(meta) = &output_meta {
        log::debug!("exporter output meta: base64={}, timeunit='{}'", meta.base64, meta.timeunit);
    }
    let time_unit = output_meta
        .map(|m| m.timeunit)
        .filter(|unit| !unit.is_empty());

    Ok(SeriesDataset {
        kind: DocumentKind::Traces,
        series,
        time_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::decode::encode_packed;

    #[test]
    fn spectrum_document_with_literal_arrays() {
        let text = r#"[{"mzs":[1.0,2.0,3.0],"intensities":[10.0,20.0,30.0],"attributes":[]}]"#;
        let ds = parse_document(text).unwrap();
        assert_eq!(ds.kind, DocumentKind::Spectra);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.series[0].x, vec![1.0, 2.0, 3.0]);
        assert_eq!(ds.series[0].y, vec![10.0, 20.0, 30.0]);
        assert_eq!(ds.series[0].label, "");
    }

    #[test]
    fn spectrum_labels_come_from_attributes() {
        let text = r#"[{"mzs":[],"intensities":[],"attributes":[
            {"accession":"MS:10003057","name":"scan number","value":"12"},
            {"accession":"MS:1000511","name":"ms level","value":"2"}]}]"#;
        let ds = parse_document(text).unwrap();
        assert_eq!(ds.series[0].label, "scan #12, MS Level 2");
        assert!(ds.series[0].is_empty());
    }

    #[test]
    fn trace_document_with_packed_arrays() {
        let text = format!(
            r#"{{"OutputMeta":{{"base64":true,"timeunit":"minutes"}},
                "content":[{{"Meta":{{"MzStart":100.0,"MzEnd":101.0}},"X":"{}","Y":"{}"}}]}}"#,
            encode_packed(&[0.0, 1.0]),
            encode_packed(&[5.0, 6.0])
        );
        let ds = parse_document(&text).unwrap();
        assert_eq!(ds.kind, DocumentKind::Traces);
        assert_eq!(ds.series[0].x, vec![0.0, 1.0]);
        assert_eq!(ds.series[0].y, vec![5.0, 6.0]);
        assert_eq!(ds.series[0].label, "m/z 100.0000-101.0000");
        assert_eq!(ds.time_unit.as_deref(), Some("minutes"));
    }

    #[test]
    fn lowercase_output_meta_is_accepted() {
        let text = r#"{"outputmeta":{"base64":false,"timeunit":"seconds"},"content":[{"X":[1.0],"Y":[2.0]}]}"#;
        let ds = parse_document(text).unwrap();
        assert_eq!(ds.time_unit.as_deref(), Some("seconds"));
        assert_eq!(ds.series[0].label, "");
    }

    #[test]
    fn pascal_case_trace_keys_are_accepted() {
        let text = r#"{"OutputMeta":{"timeunit":"minutes"},
            "Content":[{"Meta":{"MzStart":50.0},"X":[1.0,2.0],"Y":[3.0,4.0]}]}"#;
        let ds = parse_document(text).unwrap();
        assert_eq!(ds.kind, DocumentKind::Traces);
        assert_eq!(ds.series[0].y, vec![3.0, 4.0]);
        assert_eq!(ds.series[0].label, "m/z 50.0000-*");
        assert_eq!(ds.time_unit.as_deref(), Some("minutes"));
    }

    #[test]
    fn failures_name_the_record() {
        let text = r#"[{"mzs":[1.0],"intensities":[1.0]},{"mzs":[1.0]}]"#;
        let err = parse_document(text).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("record 1"), "{msg}");
        assert!(msg.contains("intensities"), "{msg}");
    }

    #[test]
    fn unexpected_shapes_are_rejected() {
        assert!(parse_document("42").is_err());
        assert!(parse_document(r#"{"spectra":[]}"#).is_err());
        assert!(parse_document(r#"{"content":{}}"#).is_err());
        assert!(parse_document("[{").is_err());
    }

    #[test]
    fn empty_documents_decode_to_empty_datasets() {
        assert!(parse_document("[]").unwrap().is_empty());
        let ds = parse_document(r#"{"content":[]}"#).unwrap();
        assert_eq!(ds.kind, DocumentKind::Traces);
        assert!(ds.is_empty());
    }
}
