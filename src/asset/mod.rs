//! Asset registry, cache-busting tokens and passthrough copying.

mod copy;
mod registry;
mod version;

pub use copy::copy_passthrough;
pub use registry::{AssetEntry, AssetRegistry, versioned_url, versioned_urls};
pub use version::{AssetError, CacheBustTable, CacheBustToken, resolve, resolve_at};
