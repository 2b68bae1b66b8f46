//! Operator-facing run summary

use adjadv_core::Summary;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Totals found before truncation
pub fn write_totals<W: Write>(writer: &mut W, summary: &Summary) -> Result<()> {
    writeln!(
        writer,
        "Total number of sentences with adjectives: {}",
        summary.adjectives_found
    )?;
    writeln!(
        writer,
        "Total number of sentences with adverbs: {}",
        summary.adverbs_found
    )?;
    Ok(())
}

/// Confirmation printed once the dataset is on disk
pub fn write_completion<W: Write>(writer: &mut W, summary: &Summary, path: &Path) -> Result<()> {
    writeln!(
        writer,
        "Wrote {} samples with adjectives and {} samples with adverbs to {}.",
        summary.adjectives_kept,
        summary.adverbs_kept,
        path.display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            adjectives_found: 15_000,
            adverbs_found: 3_000,
            adjectives_kept: 10_000,
            adverbs_kept: 3_000,
        }
    }

    #[test]
    fn test_totals_report_untruncated_counts() {
        let mut out = Vec::new();
        write_totals(&mut out, &summary()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Total number of sentences with adjectives: 15000\n\
             Total number of sentences with adverbs: 3000\n"
        );
    }

    #[test]
    fn test_completion_reports_kept_counts() {
        let mut out = Vec::new();
        write_completion(&mut out, &summary(), Path::new("data/out.json")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Wrote 10000 samples with adjectives and 3000 samples with adverbs to data/out.json.\n"
        );
    }
}
