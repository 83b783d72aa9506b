pub mod links;
pub mod media_files;
pub mod status;
pub mod thumbnail;

pub use links::{DASHBOARD_BASE, external_link, pathspec_link};
pub use media_files::{DETAIL_ROUTE, media_file_count, media_file_links};
pub use status::{finished, successful};
pub use thumbnail::asset_thumbnail;

use crate::registry::FormatterFn;

/// The canonical formatter set, merged into a registry at startup.
pub fn definitions() -> Vec<(&'static str, FormatterFn)> {
    vec![
        ("media_file_links", media_file_links as FormatterFn),
        ("media_file_count", media_file_count),
        ("asset_thumbnail", asset_thumbnail),
        ("finished", finished),
        ("successful", successful),
        ("pathspec_link", pathspec_link),
        ("external_link", external_link),
    ]
}
