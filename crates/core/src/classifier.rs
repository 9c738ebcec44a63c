use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use exif::{In, Reader, Tag, Value};
use tracing::{debug, warn};

use photo_importer_utils::datetime::{parse_exif_datetime, system_time_to_local};

/// Date a photo is filed under, as local wall-clock time.
///
/// Prefers the embedded `DateTimeOriginal` tag and falls back to the file's
/// modification time. Never fails: if neither can be read the current time
/// is used.
#[must_use]
pub fn classify_date(path: &Path) -> NaiveDateTime {
    if let Some(taken) = read_capture_time(path) {
        debug!("{}: capture time {taken} from EXIF", path.display());
        return taken;
    }

    match system_time_to_local(std::fs::metadata(path).and_then(|m| m.modified())) {
        Some(modified) => {
            debug!("{}: no usable capture time, using mtime {modified}", path.display());
            modified.naive_local()
        }
        None => {
            warn!("{}: modification time unavailable, filing under today", path.display());
            Local::now().naive_local()
        }
    }
}

/// Reads `DateTimeOriginal` from the file's EXIF container, if any.
#[must_use]
pub fn read_capture_time(path: &Path) -> Option<NaiveDateTime> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("{}: cannot open for EXIF parsing: {e}", path.display());
            return None;
        }
    };

    let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("{}: no EXIF data: {e}", path.display());
            return None;
        }
    };

    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let Value::Ascii(ref values) = field.value else {
        debug!("{}: DateTimeOriginal is not ASCII", path.display());
        return None;
    };

    let raw = String::from_utf8_lossy(values.first()?);
    let parsed = parse_exif_datetime(&raw);
    if parsed.is_none() {
        debug!("{}: unparsable DateTimeOriginal {raw:?}", path.display());
    }
    parsed
}
