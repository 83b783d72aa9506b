pub mod error;
pub mod meta;
pub mod mode;
pub mod rendered;
pub mod value;

pub use error::{Error, Result};
pub use meta::{ColumnMeta, FieldOptions};
pub use mode::RenderMode;
pub use rendered::Rendered;
pub use value::{AssetThumbnail, Listed, MediaFileRef, listed, listed_as};
