use clap::Parser;
use pwgen_generator::{DEFAULT_COUNT, DEFAULT_LENGTH, GenerationRequest, MAX_COUNT, MAX_LENGTH};

use crate::output::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "pwgen")]
#[command(about = "Generate cryptographically secure random passwords")]
pub struct Args {
    /// Number of characters per password (capped at 100)
    #[arg(short, long, env = "PWGEN_LENGTH", default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Number of passwords to generate (capped at 1000)
    #[arg(short = 'n', long, env = "PWGEN_COUNT", default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Leave out lower case letters
    #[arg(long, env = "PWGEN_NO_LOWERCASE")]
    pub no_lowercase: bool,

    /// Leave out upper case letters
    #[arg(long, env = "PWGEN_NO_UPPERCASE")]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long, env = "PWGEN_NO_NUMBERS")]
    pub no_numbers: bool,

    /// Leave out special characters
    #[arg(long, env = "PWGEN_NO_SPECIAL")]
    pub no_special: bool,

    /// Custom character set, used verbatim; overrides the class flags unless blank
    #[arg(short = 'c', long, env = "PWGEN_CHARSET", default_value = "", allow_hyphen_values = true)]
    pub charset: String,

    /// Output format
    #[arg(long, value_enum, env = "PWGEN_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Builds the generation request, capping length and count at their maxima.
    pub fn request(&self) -> GenerationRequest {
        let mut request = GenerationRequest::new(self.length, self.count)
            .with_classes(
                !self.no_lowercase,
                !self.no_uppercase,
                !self.no_numbers,
                !self.no_special,
            )
            .with_custom_character_set(self.charset.clone());

        if request.clamp_to_limits() {
            tracing::warn!(
                requested_length = self.length,
                requested_count = self.count,
                max_length = MAX_LENGTH,
                max_count = MAX_COUNT,
                "request exceeds limits, clamping"
            );
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pwgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_generator() {
        let args = parse(&[]);
        assert_eq!(args.request(), GenerationRequest::default());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_map_to_classes() {
        let args = parse(&["-l", "8", "-n", "3", "--no-uppercase", "--no-numbers", "--no-special"]);
        let request = args.request();
        assert_eq!(request.length, 8);
        assert_eq!(request.count, 3);
        assert!(request.include_lower_case);
        assert!(!request.include_upper_case);
        assert!(!request.include_numbers);
        assert!(!request.include_special_characters);
    }

    #[test]
    fn test_request_clamps_to_limits() {
        let request = parse(&["--length", "500", "--count", "100000"]).request();
        assert_eq!(request.length, MAX_LENGTH);
        assert_eq!(request.count, MAX_COUNT);
    }

    #[test]
    fn test_charset_accepts_leading_hyphen() {
        let request = parse(&["--charset", "-_="]).request();
        assert_eq!(request.custom_character_set, "-_=");
    }

    #[test]
    fn test_negative_length_rejected() {
        assert!(Args::try_parse_from(["pwgen", "--length", "-1"]).is_err());
    }

    #[test]
    fn test_json_format() {
        assert_eq!(parse(&["--format", "json"]).format, OutputFormat::Json);
    }
}
