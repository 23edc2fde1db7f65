use crate::validators::ValidatorCollection;
use itertools::Itertools;

/// Name of the InfluxDB tag holding the validator identity.
pub const IDENTITY_TAG: &str = "identityPubkey";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredicateStyle {
    /// `("identityPubkey" =~ /^(k1|k2|...)$/)`
    Regexp,
    /// `"identityPubkey" = 'k1' OR "identityPubkey" = 'k2' OR ...`
    List,
}

impl PredicateStyle {
    /// `--regexp` takes an integer: 0 selects the list form, anything else the regexp.
    pub fn from_flag(regexp: i64) -> Self {
        if regexp != 0 {
            PredicateStyle::Regexp
        } else {
            PredicateStyle::List
        }
    }
}

impl std::fmt::Display for PredicateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = match self {
            PredicateStyle::Regexp => "predicate",
            PredicateStyle::List   => "list",
        };
        write!(f, "{}", output)
    }
}

/// Renders an InfluxDB filter clause matching every validator identity.
///
/// Identities are used verbatim and validators without one are skipped.
/// With no identities at all the result is degenerate: `/^()$/` for the
/// regexp form and an empty string for the list form.
pub fn predicate(validators: &ValidatorCollection, style: PredicateStyle) -> String {
    let mut identities = validators.identities();
    match style {
        PredicateStyle::Regexp => {
            format!("(\"{}\" =~ /^({})$/)", IDENTITY_TAG, identities.join("|"))
        }
        PredicateStyle::List => identities
            .map(|identity| format!("\"{}\" = '{}'", IDENTITY_TAG, identity))
            .join(" OR "),
    }
}
