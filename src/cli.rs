use clap::Parser;
use crate::global::GlobalConfig;
use crate::global::CONFIG;
use crate::validators;
use crate::validators::PredicateStyle;
use crate::validators::SolanaCli;
use crate::validators::ValidatorSource;
use eyre::bail;
use eyre::Result;
use log::info;

/// InfluxDB Highly Staked query predicate tool.
///
/// Uses the Solana CLI to fetch the validators of a cluster, keeps the top N
/// by activated stake and prints an InfluxDB predicate matching their
/// identities, like `"identityPubkey" =~ /^(key_1|key_2|...)$/`.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Number (count) of top staked nodes to consider [default: 100]
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// URL to use for validators [default: testnet URL]
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output as tight regexp (default); set to 0 to output as a list
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub regexp: i64,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config: &GlobalConfig = &CONFIG;
        let source = SolanaCli::new(&config.solana_exe);

        let predicate = self.query(config, &source)?;

        println!();
        println!("{}", predicate);
        println!();

        Ok(())
    }

    /// Fetches, filters and formats, with flags taking precedence over `config`.
    pub fn query<S: ValidatorSource>(&self, config: &GlobalConfig, source: &S) -> Result<String> {
        let url = self.url.as_deref().unwrap_or(&config.url);
        let count = validate_count(self.count.unwrap_or(config.count))?;
        let style = PredicateStyle::from_flag(self.regexp);

        info!("Using validator URL {} to fetch top {} staked nodes", url, count);
        let top_validators = source.fetch_validators(url)?.top(count);

        info!("Success. Generating query {}.", style);
        Ok(validators::predicate(&top_validators, style))
    }
}

pub fn validate_count(count: i64) -> Result<usize> {
    if count < 1 {
        bail!("--count argument must be >=1");
    }
    Ok(usize::try_from(count)?)
}
