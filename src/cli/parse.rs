use pathgraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a cost ceiling: a positive number
pub fn parse_cost_ceiling(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_nan() || value <= 0.0 {
        return Err(format!("cost ceiling must be positive, got {}", s));
    }
    Ok(value)
}
