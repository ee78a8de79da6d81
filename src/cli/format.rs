//! Format output dispatch helpers

/// Dispatch output by format with minimal boilerplate.
///
/// ```rust,ignore
/// output_by_format!(ctx.format,
///     json => { print_json(&outcome)?; },
///     human => { print_human(&outcome); },
///     records => { print_records(&outcome); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
