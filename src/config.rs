use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`ExplorerConfig::from_env`].
pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";

/// Runtime settings shared by the RPC layer and the renderers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerConfig {
    #[serde(default = "ExplorerConfig::default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "ExplorerConfig::default_commitment")]
    pub commitment: String,
    /// Suffix appended to post balances in the token balance table.
    #[serde(default = "ExplorerConfig::default_unit_suffix")]
    pub unit_suffix: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            rpc_url: Self::default_rpc_url(),
            commitment: Self::default_commitment(),
            unit_suffix: Self::default_unit_suffix(),
        }
    }
}

impl ExplorerConfig {
    /// Defaults, with the endpoint taken from `SOLANA_RPC_URL` when it is set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(RPC_URL_ENV) {
            if !url.trim().is_empty() {
                config.rpc_url = url;
            }
        }
        config
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Replace the fields that were given, keep the rest.
    pub fn with_overrides(
        mut self,
        rpc_url: Option<String>,
        commitment: Option<String>,
        unit_suffix: Option<String>,
    ) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
        if let Some(commitment) = commitment {
            self.commitment = commitment;
        }
        if let Some(unit_suffix) = unit_suffix {
            self.unit_suffix = unit_suffix;
        }
        self
    }

    fn default_rpc_url() -> String {
        "https://api.mainnet-beta.solana.com".to_string()
    }

    fn default_commitment() -> String {
        "confirmed".to_string()
    }

    fn default_unit_suffix() -> String {
        "UNITs".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ExplorerConfig =
            serde_json::from_str(r#"{"rpcUrl":"http://localhost:8899"}"#).unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8899");
        assert_eq!(config.commitment, "confirmed");
        assert_eq!(config.unit_suffix, "UNITs");
    }

    #[test]
    fn overrides_only_replace_given_fields() {
        let base = ExplorerConfig::default().with_rpc_url("http://localhost:8899");

        let config = base
            .clone()
            .with_overrides(None, Some("finalized".to_string()), Some("BBA".to_string()));

        assert_eq!(config.rpc_url, "http://localhost:8899");
        assert_eq!(config.commitment, "finalized");
        assert_eq!(config.unit_suffix, "BBA");
        assert_eq!(base.clone().with_overrides(None, None, None), base);
    }
}
