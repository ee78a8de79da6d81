use stepgraph_core::format::OutputFormat;
use stepgraph_core::graph::Algorithm;

/// Parse algorithm name (case-insensitive)
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse output format (case-insensitive)
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
