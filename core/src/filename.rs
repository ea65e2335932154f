use crate::size::SizeClass;

pub const FRAME_EXTENSION: &str = "bmp";

/// Classifies a frame filename of the form `<SIZE>_<N>.bmp`, ignoring case.
///
/// Returns `None` for anything else, including indices that do not fit in a
/// `u32`.
pub fn classify(name: &str) -> Option<(SizeClass, u32)> {
    let (stem, extension) = name.rsplit_once('.')?;
    if !extension.eq_ignore_ascii_case(FRAME_EXTENSION) {
        return None;
    }
    let (size, digits) = stem.split_once('_')?;
    let size = SizeClass::from_name(size)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse::<u32>().ok()?;
    Some((size, index))
}
