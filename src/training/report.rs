//! Training-run log
//!
//! Appends a fixed-format markdown block per run to a notes file. This is
//! documentation for humans, not telemetry: pure append, no rotation, no
//! machine-parseable structure.

use chrono::Local;
use std::io::Write;
use std::path::Path;

use super::TrainingOutcome;
use crate::error::Result;

/// Append one run's results to the log file, creating it (and its parent
/// directory) on first use.
pub fn append_entry<P: AsRef<Path>>(
    path: P,
    dataset_name: &str,
    outcome: &TrainingOutcome,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let now = Local::now().format("%d/%m/%Y %H:%M");
    writeln!(file, "\n## Training run – {now}")?;
    writeln!(file, "- Dataset: {dataset_name}")?;
    writeln!(file, "- Accuracy: {:.2}", outcome.accuracy)?;
    writeln!(file, "- Confusion matrix:")?;
    writeln!(file, "{}", outcome.confusion)?;
    writeln!(
        file,
        "- Notes: logistic regression over bag-of-words counts."
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Label;
    use crate::training::ConfusionMatrix;

    fn outcome() -> TrainingOutcome {
        let mut confusion = ConfusionMatrix::default();
        confusion.record(Label::Ham, Label::Ham);
        confusion.record(Label::Spam, Label::Spam);
        TrainingOutcome {
            accuracy: 0.97,
            confusion,
        }
    }

    #[test]
    fn appends_a_block_per_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("notas.md");

        append_entry(&path, "SMS Spam Collection", &outcome()).unwrap();
        append_entry(&path, "SMS Spam Collection", &outcome()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("## Training run").count(), 2);
        assert!(content.contains("- Dataset: SMS Spam Collection"));
        assert!(content.contains("- Accuracy: 0.97"));
        assert!(content.contains("[[1, 0],"));
    }
}
