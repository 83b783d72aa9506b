// Rendering layer - the registry and formatter set the admin grid
// dispatches through for every cell
pub mod formatters;
pub mod html;
pub mod placeholders;
pub mod registry;

pub use placeholders::{BootstrapPlaceholders, Placeholders};
pub use registry::{FormatterFn, Registry};
