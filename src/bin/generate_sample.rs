use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value as JsonValue};

use msjson_plot::data::decode::{encode_packed, MS_LEVEL_ACCESSION, SCAN_NUMBER_ACCESSION};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_signal(axis: &[f64], peaks: &[(f64, f64, f64)], noise_level: f64, rng: &mut SimpleRng) -> Vec<f64> {
    axis.iter()
        .map(|&x| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(x, mu, sigma, amp))
                .sum();
            (signal + rng.gauss(0.0, noise_level)).max(0.0)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Spectrum-query output: one record per scan, axes either literal or packed.
fn spectra_document(rng: &mut SimpleRng, packed: bool) -> JsonValue {
    // m/z 200 → 1199.5, step 0.5
    let mzs: Vec<f64> = (0..2000).map(|i| 200.0 + i as f64 * 0.5).collect();

    let scans: [(u32, u8, Vec<(f64, f64, f64)>); 3] = [
        (1, 1, vec![(445.12, 0.4, 8.0e5), (519.14, 0.4, 3.1e5), (850.0, 0.6, 1.2e5)]),
        (2, 2, vec![(300.2, 0.3, 2.0e4), (412.7, 0.3, 5.5e4), (610.3, 0.3, 1.8e4)]),
        (3, 2, vec![(275.1, 0.3, 4.2e4), (388.9, 0.3, 2.6e4), (702.4, 0.3, 3.9e4)]),
    ];

    let records: Vec<JsonValue> = scans
        .iter()
        .map(|(scan, level, peaks)| {
            let intensities = generate_signal(&mzs, peaks, 500.0, rng);
            let attributes = json!([
                {"accession": SCAN_NUMBER_ACCESSION, "name": "scan number", "value": scan.to_string()},
                {"accession": "MS:1000016", "name": "scan start time", "value": (*scan as f64 * 1.7).to_string()},
                {"accession": MS_LEVEL_ACCESSION, "name": "ms level", "value": level.to_string()},
            ]);
            if packed {
                json!({"mzs": encode_packed(&mzs), "intensities": encode_packed(&intensities), "attributes": attributes})
            } else {
                json!({"mzs": mzs, "intensities": intensities, "attributes": attributes})
            }
        })
        .collect();

    JsonValue::Array(records)
}

/// XIC output: packed traces plus one trace without scans (`null` axes).
fn xic_document(rng: &mut SimpleRng) -> JsonValue {
    // 0 → 29.95 minutes, step 0.05
    let times: Vec<f64> = (0..600).map(|i| i as f64 * 0.05).collect();

    let windows = [
        (488.5, 489.5, vec![(12.4, 0.15, 3.0e6)]),
        (520.2, 520.4, vec![(8.1, 0.2, 1.1e6), (17.9, 0.25, 6.0e5)]),
    ];

    let mut content: Vec<JsonValue> = windows
        .iter()
        .map(|(start, end, peaks)| {
            let intensities = generate_signal(&times, peaks, 2.0e3, rng);
            json!({
                "Meta": {"MzStart": start, "MzEnd": end, "Filter": "ms"},
                "X": encode_packed(&times),
                "Y": encode_packed(&intensities),
            })
        })
        .collect();
    content.push(json!({
        "Meta": {"MzStart": 1500.0, "MzEnd": 1500.1},
        "X": null,
        "Y": null,
    }));

    json!({
        "OutputMeta": {"base64": true, "timeunit": "minutes"},
        "content": content,
    })
}

fn write_json(dir: &Path, name: &str, doc: &JsonValue) -> Result<()> {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(doc).context("serializing sample")?;
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    write_json(&out_dir, "sample_spectra.json", &spectra_document(&mut rng, false))?;
    write_json(&out_dir, "sample_spectra_base64.json", &spectra_document(&mut rng, true))?;
    write_json(&out_dir, "sample_xics.json", &xic_document(&mut rng))?;

    Ok(())
}
