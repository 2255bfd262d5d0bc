//! Page permalinks and route discovery.

mod permalink;
mod route;
mod scan;

pub use permalink::{PermalinkRule, derive_permalink};
pub use route::PageRoute;
pub use scan::{path_stem, scan_pages};
