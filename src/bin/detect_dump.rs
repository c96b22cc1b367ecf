use ridge_quality::diagnostics::DetectionReport;
use ridge_quality::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use ridge_quality::maps::quality::{is_image_empty, quality_map};
use ridge_quality::{DetectParams, RidgeDetector};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DumpToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub detect: DetectToolConfig,
    pub output: DumpOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectToolConfig {
    pub block_size: usize,
    pub min_contrast: i32,
    pub max_minutiae: usize,
}

impl Default for DetectToolConfig {
    fn default() -> Self {
        let params = DetectParams::default();
        Self {
            block_size: params.block_size,
            min_contrast: params.min_contrast,
            max_minutiae: params.max_minutiae,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DumpOutputConfig {
    #[serde(rename = "binarized_image")]
    pub binarized_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DumpToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let params = DetectParams {
        block_size: config.detect.block_size.max(1),
        min_contrast: config.detect.min_contrast,
        max_minutiae: config.detect.max_minutiae,
        ..Default::default()
    };

    let detector = RidgeDetector::default();
    let detection = detector
        .detect(gray.as_view(), &params)
        .map_err(|e| format!("Detection failed: {e}"))?;

    let quality = quality_map(&detection.maps);
    let summary = DumpSummary {
        report: DetectionReport::summarize(
            gray.width(),
            gray.height(),
            &detection.maps,
            &detection.minutiae,
            &detection.timing,
        ),
        empty: is_image_empty(&quality),
        minutiae: &detection.minutiae,
    };

    save_grayscale_u8(&detection.binarized, &config.output.binarized_image)?;
    write_json_file(&config.output.report_json, &summary)?;

    println!(
        "Saved binarized image to {}",
        config.output.binarized_image.display()
    );
    println!(
        "Saved report with {} minutiae to {}",
        detection.minutiae.len(),
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: detect_dump <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DumpSummary<'a> {
    #[serde(flatten)]
    report: DetectionReport,
    empty: bool,
    minutiae: &'a ridge_quality::minutiae::Minutiae,
}
