use crate::functions::format_to_sol;
use crate::validators::Validator;
use eyre::Result;
use eyre::WrapErr;
use log::info;
use log::warn;
use serde::Deserialize;

/// Top-level object printed by `solana validators --output json`.
#[derive(Deserialize)]
struct ValidatorsOutput {
    #[serde(default)]
    validators: Vec<Validator>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatorCollection(Vec<Validator>);

impl ValidatorCollection {
    /// Parses the JSON document printed by the Solana CLI.
    ///
    /// A document without a `validators` key yields an empty collection.
    pub fn from_json(input: &str) -> Result<Self> {
        let output: ValidatorsOutput = serde_json::from_str(input)
            .wrap_err("Invalid JSON from validator call")?;
        Ok(Self(output.validators))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keeps the `count` most staked validators, largest stake first.
    ///
    /// The sort is stable, so validators with equal stake keep the order the
    /// source returned them in and the cutoff at `count` among them is
    /// arbitrary.
    pub fn top(mut self, count: usize) -> Self {
        if self.len() < count {
            warn!(
                "Number of validators ({}) is smaller than requested count ({})",
                self.len(),
                count
            );
        }

        self.0.sort_by_key(|v| std::cmp::Reverse(v.stake()));
        self.0.truncate(count);

        if let Some(last) = self.0.last() {
            info!(
                "Kept {} validators, smallest stake {} SOL",
                self.len(),
                format_to_sol(last.stake())
            );
        }

        self
    }

    /// Non-empty identity keys, in collection order.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(Validator::identity)
    }
}

impl FromIterator<Validator> for ValidatorCollection {
    fn from_iter<T: IntoIterator<Item = Validator>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ValidatorCollection {
    type Item = &'a Validator;
    type IntoIter = std::slice::Iter<'a, Validator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
