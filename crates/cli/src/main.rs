use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facematch_core::shared::constants::DEFAULT_ENDPOINT;
use facematch_core::upload::domain::result_image::ResultImage;
use facematch_core::upload::domain::selected_file::SelectedFile;
use facematch_core::upload::domain::upload_form::{SubmitOutcome, UploadForm};
use facematch_core::upload::infrastructure::http_image_submitter::HttpImageSubmitter;

/// Submit a face image and a test image to the matching service and save the
/// image it returns.
#[derive(Parser, Debug)]
#[command(name = "facematch")]
struct Cli {
    /// Image of the face to look for. Sent as an empty part when omitted.
    #[arg(long)]
    face: Option<PathBuf>,

    /// Image to search for the face. Sent as an empty part when omitted.
    #[arg(long)]
    test: Option<PathBuf>,

    /// Where to save the returned image (default: result.<ext>).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Matching service endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut form = UploadForm::new();
    form.select_face(read_optional(cli.face.as_deref())?);
    form.select_test(read_optional(cli.test.as_deref())?);

    let submitter = HttpImageSubmitter::new(cli.endpoint.as_str())?;
    if form.submit_with(&submitter) != SubmitOutcome::Displayed {
        return Err(format!("submission to {} failed", submitter.endpoint()).into());
    }

    let result = form.result().ok_or("no result received")?;
    if let Some((w, h)) = result.dimensions() {
        log::info!("Received {w}x{h} image");
    }

    let output = output_path(cli.output, result);
    write_result(&output, result)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

fn read_optional(path: Option<&Path>) -> Result<Option<SelectedFile>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Some(SelectedFile::read(path)?)),
        None => Ok(None),
    }
}

fn output_path(requested: Option<PathBuf>, result: &ResultImage) -> PathBuf {
    requested.unwrap_or_else(|| PathBuf::from(format!("result.{}", result.extension())))
}

fn write_result(path: &Path, result: &ResultImage) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.bytes())?;
    Ok(())
}
