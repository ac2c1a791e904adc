use clap::Parser;
use ssn_core::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ssn-generate",
    version,
    about = "Generate SSN-shaped strings for demos, or check one against the format rules",
    long_about = None
)]
pub struct Args {
    /// Number of results to print
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Seed for a reproducible digit source (default: OS entropy)
    #[arg(long, env = "SSN_SEED", value_parser = ssn_dst::parse_seed)]
    pub seed: Option<u64>,

    /// Candidates to draw before giving up
    #[arg(
        long,
        default_value_t = GeneratorConfig::default().max_attempts,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    /// Check VALUE against the format rules instead of generating
    #[arg(long, value_name = "VALUE", conflicts_with_all = ["count", "json"])]
    pub check: Option<String>,

    /// Print one JSON object per result
    #[arg(long)]
    pub json: bool,

    /// Log generation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ssn-generate"]).unwrap();
        assert_eq!(args.count, 1);
        assert_eq!(args.max_attempts, 1_000_000);
        assert!(args.check.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_generate_flags() {
        let args = Args::try_parse_from([
            "ssn-generate",
            "-n",
            "5",
            "--seed",
            "42",
            "--max-attempts",
            "10",
            "--json",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.max_attempts, 10);
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["ssn-generate", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["ssn-generate", "--seed", "0"]).is_err());
        assert!(Args::try_parse_from(["ssn-generate", "--seed", "abc"]).is_err());
        assert!(Args::try_parse_from(["ssn-generate", "--max-attempts", "0"]).is_err());
    }

    #[test]
    fn test_check_conflicts_with_generation_flags() {
        let args = Args::try_parse_from(["ssn-generate", "--check", "123-45-6789"]).unwrap();
        assert_eq!(args.check.as_deref(), Some("123-45-6789"));

        assert!(Args::try_parse_from(["ssn-generate", "--check", "1", "--json"]).is_err());
        assert!(Args::try_parse_from(["ssn-generate", "--check", "1", "-n", "2"]).is_err());
    }
}
