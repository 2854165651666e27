use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::licenses::{SsplLicenseAcceptance, UsageBasedLicense};

/// Deployer-edited settings for the sample render farm.
///
/// The defaults are placeholders; fill them in with your own values
/// before running the provisioning tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deadline client Linux AMI to launch, per region.
    pub deadline_client_linux_ami_map: HashMap<String, String>,

    /// SecretsManager secret (binary) holding the UBL certificates as a .zip.
    pub ubl_certificate_secret_arn: String,

    /// The usage-based licenses to enable.
    pub ubl_licenses: Vec<UsageBasedLicense>,

    /// EC2 keypair to associate with the instances, if any.
    pub key_pair_name: Option<String>,

    /// Back the render farm with MongoDB. When false, Amazon DocumentDB
    /// backs the farm instead.
    pub deploy_mongo_db: bool,

    /// Only read when `deploy_mongo_db` is true. Set to
    /// `SsplLicenseAcceptance::UserAcceptsSspl` to accept the SSPL and
    /// proceed with the MongoDB deployment.
    pub accept_sspl_license: SsplLicenseAcceptance,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deadline_client_linux_ami_map: HashMap::from([(
                "region".to_string(),
                "ami-id".to_string(),
            )]),
            ubl_certificate_secret_arn: String::new(),
            ubl_licenses: Vec::new(),
            key_pair_name: None,
            deploy_mongo_db: false,
            accept_sspl_license: SsplLicenseAcceptance::UserRejectsSspl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ami_map_has_one_placeholder_entry() {
        let config = AppConfig::default();

        assert_eq!(1, config.deadline_client_linux_ami_map.len());
        assert_eq!(
            Some(&"ami-id".to_string()),
            config.deadline_client_linux_ami_map.get("region")
        );
    }

    #[test]
    fn default_secret_arn_is_empty() {
        assert!(AppConfig::default().ubl_certificate_secret_arn.is_empty());
    }

    #[test]
    fn default_license_list_is_empty() {
        assert!(AppConfig::default().ubl_licenses.is_empty());
    }

    #[test]
    fn default_key_pair_name_is_unset() {
        assert_eq!(None, AppConfig::default().key_pair_name);
    }

    #[test]
    fn default_backend_is_documentdb() {
        assert!(!AppConfig::default().deploy_mongo_db);
    }

    #[test]
    fn default_sspl_acceptance_is_rejection() {
        assert_eq!(
            SsplLicenseAcceptance::UserRejectsSspl,
            AppConfig::default().accept_sspl_license
        );
    }

    #[test]
    fn populated_config_survives_a_json_round_trip() {
        let config = AppConfig {
            deadline_client_linux_ami_map: HashMap::from([(
                "us-west-2".to_string(),
                "ami-0123456789abcdef0".to_string(),
            )]),
            ubl_certificate_secret_arn:
                "arn:aws:secretsmanager:us-west-2:111122223333:secret:CertSecret-abc123"
                    .to_string(),
            ubl_licenses: vec![
                UsageBasedLicense::for_maya(Some(10)),
                UsageBasedLicense::for_nuke(None),
            ],
            key_pair_name: Some("MyEC2KeyPair".to_string()),
            deploy_mongo_db: true,
            accept_sspl_license: SsplLicenseAcceptance::UserAcceptsSspl,
        };

        let rendered = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&rendered).unwrap();

        assert_eq!(config, parsed);
    }
}
