use graphlab_core::format::OutputFormat;
use graphlab_core::request::Algorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
