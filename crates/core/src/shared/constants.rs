/// Number of blur passes applied when the caller does not choose one.
pub const DEFAULT_BLUR_PASSES: usize = 5;

/// Appended to the input file stem to derive a default output name.
pub const BLURRED_SUFFIX: &str = "_blurred";

/// Extension of the default output file, which is always written as PNG.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";

/// Input extensions the CLI accepts, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp", "gif"];
