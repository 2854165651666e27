//! # licenses
//! Types for the usage-based licensing fields of the farm configuration

use serde::{Deserialize, Serialize};

/// A usage-based license the render farm's license forwarder should serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageBasedLicense {
    pub license_name: String,
    pub limit: u32,
}

impl UsageBasedLicense {
    /// Sentinel limit meaning no cap on concurrent seats.
    pub const UNLIMITED: u32 = 2_147_483_647;

    fn new(license_name: &str, limit: Option<u32>) -> Self {
        Self {
            license_name: license_name.to_string(),
            limit: limit.unwrap_or(Self::UNLIMITED),
        }
    }

    pub fn for_maya(limit: Option<u32>) -> Self {
        Self::new("maya", limit)
    }

    pub fn for_houdini(limit: Option<u32>) -> Self {
        Self::new("houdini", limit)
    }

    pub fn for_nuke(limit: Option<u32>) -> Self {
        Self::new("nuke", limit)
    }

    pub fn for_arnold(limit: Option<u32>) -> Self {
        Self::new("arnold", limit)
    }

    pub fn for_katana(limit: Option<u32>) -> Self {
        Self::new("katana", limit)
    }
}

/// Whether the deployer accepts MongoDB's Server Side Public License.
///
/// Only read when the farm is backed by MongoDB; the DocumentDB mode
/// never consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SsplLicenseAcceptance {
    UserAcceptsSspl,
    #[default]
    UserRejectsSspl,
}
