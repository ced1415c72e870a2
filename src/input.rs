use std::path::Path;

use anyhow::{Context, Result, bail};

/// Reads a score file: one value per line, blank lines skipped, `#`
/// starting a comment.
pub fn read_scores(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scores: {}", path.display()))?;
    parse_scores(&text)
}

fn parse_scores(text: &str) -> Result<Vec<f64>> {
    let mut scores = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let content = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let trimmed = content.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: f64 = trimmed
            .parse()
            .with_context(|| format!("line {}: not a number: {trimmed:?}", lineno + 1))?;
        scores.push(value);
    }
    if scores.is_empty() {
        bail!("score file contains no values");
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values() {
        let scores = parse_scores("0.9\n0.88\n0.75\n").unwrap();
        assert_eq!(scores, vec![0.9, 0.88, 0.75]);
    }

    #[test]
    fn comments_and_blank_lines() {
        let text = "# exam simulations\n0.9\n\n0.88  # second attempt\n";
        let scores = parse_scores(text).unwrap();
        assert_eq!(scores, vec![0.9, 0.88]);
    }

    #[test]
    fn garbage_reports_line_number() {
        let err = parse_scores("0.9\nabc\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(parse_scores("# nothing here\n").is_err());
    }
}
