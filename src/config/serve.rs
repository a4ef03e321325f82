//! `[serve]` section: preview server settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[serve]` section in folio.toml.
///
/// ```toml
/// [serve]
/// interface = "0.0.0.0"
/// port = 3000
/// watch = true
/// redirects = true   # 308 towards the [build].trailing_slash form
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Bind address. `0.0.0.0` exposes the preview on the LAN.
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: String,

    /// First port to try; the next nine are tried when it is taken.
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,

    /// Rebuild when folio.toml or the assets change.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub watch: bool,

    /// Redirect request paths whose trailing slash disagrees with
    /// `[build].trailing_slash`. When off, both forms resolve.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub redirects: bool,
}
