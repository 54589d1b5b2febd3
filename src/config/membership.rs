//! Membership configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::membership::{MembershipError, SpendPolicy, TierTable};

/// Membership configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembershipConfig {
    /// Which orders count toward cumulative spend
    #[serde(default)]
    pub spend_policy: SpendPolicy,

    /// YAML file overriding the built-in tier table
    pub tier_table_path: Option<PathBuf>,
}

impl MembershipConfig {
    /// Load the tier table, falling back to the standard one.
    pub fn load_tier_table(&self) -> Result<TierTable, MembershipError> {
        match &self.tier_table_path {
            Some(path) => TierTable::load_from_path(path),
            None => Ok(TierTable::standard()),
        }
    }

    /// Validate membership configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.tier_table_path {
            if !path.is_file() {
                return Err(ValidationError::TierTableNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_use_standard_table() {
        let config = MembershipConfig::default();
        assert_eq!(config.spend_policy, SpendPolicy::AllOrders);
        assert!(config.validate().is_ok());
        assert_eq!(config.load_tier_table().unwrap(), TierTable::standard());
    }

    #[test]
    fn test_loads_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"tiers:
  - code: regular
    display_name: Regular
    min_spend: 0
    color: "#999999"
    icon: regular
  - code: vip
    display_name: VIP
    min_spend: 300
    color: "#FFD700"
    icon: vip
"##
        )
        .unwrap();

        let config = MembershipConfig {
            tier_table_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
        let table = config.load_tier_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.tiers()[1].code.as_str(), "vip");
    }

    #[test]
    fn test_validation_missing_file() {
        let config = MembershipConfig {
            tier_table_path: Some(PathBuf::from("/nonexistent/tiers.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TierTableNotFound(_))
        ));
    }

    #[test]
    fn test_spend_policy_deserializes_snake_case() {
        let config: MembershipConfig =
            serde_json::from_str(r#"{"spend_policy": "exclude_cancelled"}"#).unwrap();
        assert_eq!(config.spend_policy, SpendPolicy::ExcludeCancelled);
        assert!(config.tier_table_path.is_none());
    }
}
