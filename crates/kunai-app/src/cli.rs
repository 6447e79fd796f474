use std::path::PathBuf;

use clap::Parser;
use kunai_core::config::ValidationConfig;
use kunai_rfc::rfc::ical::core::Method;
use kunai_rfc::rfc::validation::Strictness;

/// Check iCalendar components against the iTIP property presence tables.
#[derive(Debug, Parser)]
#[command(name = "kunai", version, about)]
pub struct Cli {
    /// iTIP method to validate under. Defaults to the calendar's METHOD.
    #[arg(short, long)]
    pub method: Option<Method>,

    /// Waive strict-only requirements such as ORGANIZER on published to-dos.
    #[arg(long, conflicts_with = "strict")]
    pub relaxed: bool,

    /// Enforce every requirement, overriding `validation.relaxed`.
    #[arg(long)]
    pub strict: bool,

    /// JSON component document. Reads stdin when omitted.
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Resolves the strictness mode, letting flags override configuration.
    #[must_use]
    pub fn strictness(&self, config: &ValidationConfig) -> Strictness {
        if self.relaxed {
            Strictness::Relaxed
        } else if self.strict {
            Strictness::Strict
        } else {
            Strictness::from(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("kunai").chain(args.iter().copied()))
    }

    #[test]
    fn parses_method_and_input() {
        let cli = parse(&["--method", "decline-counter", "todo.json"]).expect("valid args");
        assert_eq!(cli.method, Some(Method::DeclineCounter));
        assert_eq!(cli.input, Some(PathBuf::from("todo.json")));
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(parse(&["-m", "FORWARD"]).is_err());
    }

    #[test]
    fn strictness_flags_override_config() {
        let relaxed_config = ValidationConfig { relaxed: true };
        let strict_config = ValidationConfig::default();

        let cli = parse(&[]).expect("valid args");
        assert_eq!(cli.strictness(&relaxed_config), Strictness::Relaxed);
        assert_eq!(cli.strictness(&strict_config), Strictness::Strict);

        let cli = parse(&["--strict"]).expect("valid args");
        assert_eq!(cli.strictness(&relaxed_config), Strictness::Strict);

        let cli = parse(&["--relaxed"]).expect("valid args");
        assert_eq!(cli.strictness(&strict_config), Strictness::Relaxed);
    }

    #[test]
    fn relaxed_and_strict_conflict() {
        assert!(parse(&["--relaxed", "--strict"]).is_err());
    }
}
