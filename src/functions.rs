use num_format::Locale;
use num_format::ToFormattedString;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Formats a lamport amount as whole SOL with thousands separators.
pub fn format_to_sol(lamports: u64) -> String {
    (lamports / LAMPORTS_PER_SOL).to_formatted_string(&Locale::en)
}
