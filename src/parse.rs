/// Parse comma/space separated text into scores, in order of appearance.
///
/// Commas are normalized to whitespace before splitting, so `"1, 2,3"` and
/// `"1 2 3"` tokenize identically. Tokens that do not parse as a finite
/// float are logged and dropped; they never abort the rest of the parse.
pub fn parse_scores(raw: &str) -> Vec<f64> {
    let normalized = raw.replace(',', " ");
    let mut scores = Vec::new();
    for token in normalized.split_whitespace() {
        match token.parse::<f64>() {
            // `parse::<f64>` accepts "inf" and "NaN"; scores must be finite.
            Ok(value) if value.is_finite() => scores.push(value),
            _ => tracing::warn!("skipping non-numeric token: {token}"),
        }
    }
    scores
}
