//! Archive entry naming.
//!
//! Entries are named either by row position (`image_<n><ext>`) or by
//! slugified brand and model labels (`<brand>-<model><ext>`). The extension
//! comes from the URL path, else a configurable default.

mod extension;
mod slug;

pub use extension::{extension_from_url, extension_or};
pub use slug::slugify;

use crate::sheet::CellValue;

/// `image_<row_number><ext>`; `row_number` is 1-based.
pub fn indexed_filename(row_number: usize, url: &str, default_ext: &str) -> String {
    format!("image_{}{}", row_number, extension_or(url, default_ext))
}

/// `<slug(brand)>-<slug(model)><ext>`.
///
/// A missing label contributes an empty slug rather than a placeholder such
/// as `nan`, so a blank brand yields names like `-3008.png`.
pub fn brand_model_filename(
    brand: &CellValue,
    model: &CellValue,
    url: &str,
    default_ext: &str,
) -> String {
    format!(
        "{}-{}{}",
        slugify(&brand.to_text()),
        slugify(&model.to_text()),
        extension_or(url, default_ext)
    )
}
