use regex::Regex;
use std::path::Path;

use photo_importer_models::PhotoFormat;

/// File names the importer picks up. Matching is case-insensitive.
#[allow(clippy::expect_used)]
pub static PHOTO_EXTENSIONS: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|cr2|png)$").expect("Failed to compile photo extensions regex")
});

#[must_use]
pub fn determine_photo_format(extension: &str) -> Option<PhotoFormat> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some(PhotoFormat::Jpeg),
        "png" => Some(PhotoFormat::Png),
        "cr2" => Some(PhotoFormat::CanonRaw),
        _ => None,
    }
}

/// Format of `path` judged by the suffix of its file name, or `None` when it
/// is not one of the supported photo types.
#[must_use]
pub fn photo_format(path: &Path) -> Option<PhotoFormat> {
    let name = path.file_name()?.to_str()?;
    let captures = PHOTO_EXTENSIONS.captures(name)?;
    determine_photo_format(captures.get(1)?.as_str())
}
