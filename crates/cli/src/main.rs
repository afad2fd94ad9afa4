use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use pixel_blur_core::blurring::infrastructure::neighborhood_blurrer::NeighborhoodBlurrer;
use pixel_blur_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use pixel_blur_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use pixel_blur_core::pipeline::blur_image_use_case::BlurImageUseCase;
use pixel_blur_core::pipeline::pipeline_logger::LogPipelineLogger;
use pixel_blur_core::shared::constants::{
    BLURRED_SUFFIX, DEFAULT_BLUR_PASSES, DEFAULT_OUTPUT_EXTENSION, IMAGE_EXTENSIONS,
};

/// Repeated 3x3 neighborhood-mean blur for images.
#[derive(Parser)]
#[command(name = "pixel-blur")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file (default: <input>_blurred.png next to the input).
    output: Option<PathBuf>,

    /// Number of blur passes to apply.
    #[arg(long, short = 'n', default_value_t = DEFAULT_BLUR_PASSES)]
    passes: usize,
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
    validate(&cli)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    let mut use_case = BlurImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(NeighborhoodBlurrer::new()),
        cli.passes,
    )
    .with_logger(Box::new(LogPipelineLogger::new()));

    use_case.execute(&cli.input, &output)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_image(&cli.input) {
        return Err(format!(
            "Unsupported input extension: {} (expected one of: {})",
            cli.input.display(),
            IMAGE_EXTENSIONS.join(", ")
        )
        .into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(BLURRED_SUFFIX);
    name.push(".");
    name.push(DEFAULT_OUTPUT_EXTENSION);
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_appends_suffix() {
        assert_eq!(
            default_output_path(Path::new("images/small_logo.png")),
            PathBuf::from("images/small_logo_blurred.png")
        );
    }

    #[test]
    fn test_default_output_path_always_png() {
        assert_eq!(
            default_output_path(Path::new("photo.JPG")),
            PathBuf::from("photo_blurred.png")
        );
    }

    #[test]
    fn test_is_image_case_insensitive() {
        assert!(is_image(Path::new("a.PNG")));
        assert!(is_image(Path::new("a.jpeg")));
        assert!(!is_image(Path::new("a.txt")));
        assert!(!is_image(Path::new("noext")));
    }

    #[test]
    fn test_passes_default() {
        let cli = Cli::parse_from(["pixel-blur", "in.png"]);
        assert_eq!(cli.passes, DEFAULT_BLUR_PASSES);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_passes_flag() {
        let cli = Cli::parse_from(["pixel-blur", "in.png", "out.png", "--passes", "0"]);
        assert_eq!(cli.passes, 0);
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_validate_missing_input() {
        let cli = Cli::parse_from(["pixel-blur", "/nonexistent/in.png"]);
        assert!(validate(&cli).is_err());
    }
}
