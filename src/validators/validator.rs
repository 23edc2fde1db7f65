use serde::Deserialize;

/// One entry of the `validators` array printed by `solana validators --output json`.
///
/// Only the two fields used for ranking and matching are kept; everything
/// else the CLI prints is ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    #[serde(default)]
    identity_pubkey: Option<String>,
    #[serde(default)]
    activated_stake: Option<u64>,
}

impl Validator {
    #[cfg(test)]
    pub fn new(identity_pubkey: Option<&str>, activated_stake: Option<u64>) -> Self {
        Self {
            identity_pubkey: identity_pubkey.map(str::to_string),
            activated_stake,
        }
    }

    /// Activated stake in lamports, zero when the field is absent.
    pub fn stake(&self) -> u64 {
        self.activated_stake.unwrap_or(0)
    }

    /// Identity key, `None` when absent or empty.
    pub fn identity(&self) -> Option<&str> {
        self.identity_pubkey
            .as_deref()
            .filter(|identity| !identity.is_empty())
    }
}
