use ridge_quality::features::{nfiq_features, znorm};
use ridge_quality::image::io::load_grayscale_image;
use ridge_quality::maps::quality::{is_image_empty, quality_map};
use ridge_quality::mlp::WeightsFile;
use ridge_quality::{DetectParams, RidgeDetector};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let image_path = args.next().ok_or_else(usage)?;
    let weights_path = args.next().ok_or_else(usage)?;

    let gray = load_grayscale_image(Path::new(&image_path))?;
    let weights_file = WeightsFile::load(Path::new(&weights_path))?;
    let classifier = weights_file
        .classifier()
        .map_err(|e| format!("Bad weights file: {e}"))?;

    let detector = RidgeDetector::default();
    let detection = detector
        .detect(gray.as_view(), &DetectParams::default())
        .map_err(|e| format!("Detection failed: {e}"))?;

    let quality = quality_map(&detection.maps);
    if is_image_empty(&quality) {
        return Err("Image is empty: no usable fingerprint area".to_string());
    }

    let mut features = nfiq_features(&detection, &quality);
    znorm(
        &mut features,
        &weights_file.znorm_mean,
        &weights_file.znorm_stddev,
    );

    let result = classifier
        .classify(&weights_file.weights, &features)
        .map_err(|e| format!("Classification failed: {e}"))?;

    // Quality classes are reported 1-based.
    println!("NFIQ={}\tConf={:.6}", result.hyp_class + 1, result.confidence);
    Ok(())
}

fn usage() -> String {
    "Usage: ridge-quality <image> <weights.json>".to_string()
}
