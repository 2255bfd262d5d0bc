//! Configuration section definitions.
//!
//! | Section         | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `[build]`       | Output and data directories, mode variable     |
//! | `[assets]`      | Asset registry for cache busting               |
//! | `[permalink]`   | Templating root and permalink rule             |
//! | `[passthrough]` | Files and directories copied verbatim          |

mod assets;
mod build;
mod passthrough;
mod permalink;

pub use assets::{AssetEntryConfig, AssetsConfig};
pub use build::BuildConfig;
pub use passthrough::PassthroughConfig;
pub use permalink::PermalinkConfig;
