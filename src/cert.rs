//! Completion certificate artifact.
//!
//! The certificate is rendered as plain text: shown on the final screen and
//! saved to a file on request. Graphical export is a presentation concern
//! the kiosk deliberately leaves to its surroundings.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::quiz::QUESTION_COUNT;

/// A completion certificate for one quiz attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub recipient: String,
    pub score: u32,
    pub total: u32,
    pub issued_on: NaiveDate,
    /// Printed on the certificate so a staff member can match it to a
    /// session log entry.
    pub verification_id: Uuid,
}

impl Certificate {
    pub fn new(recipient: impl Into<String>, score: u32) -> Self {
        Self {
            recipient: recipient.into(),
            score,
            total: QUESTION_COUNT as u32,
            issued_on: Utc::now().date_naive(),
            verification_id: Uuid::new_v4(),
        }
    }

    /// Score as a rounded percentage.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn passed(&self, pass_percent: u8) -> bool {
        self.percent() >= pass_percent as u32
    }

    /// The certificate body, ready to print or save.
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(62);
        let lines = [
            rule.clone(),
            String::new(),
            "              CERTIFICATE OF COMPLETION".to_string(),
            String::new(),
            "                AI Experience Journey".to_string(),
            String::new(),
            "  This certifies that".to_string(),
            String::new(),
            format!("      {}", self.recipient),
            String::new(),
            "  completed the guided tour of AI capabilities and the".to_string(),
            format!(
                "  knowledge quiz with a score of {}/{} ({}%).",
                self.score,
                self.total,
                self.percent()
            ),
            String::new(),
            format!("  Issued on: {}", self.issued_on.format("%Y-%m-%d")),
            format!("  Verification: {}", self.verification_id),
            String::new(),
            rule,
        ];
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the certificate under `dir`, returning the file path.
    pub fn save_to(&self, dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let filename = format!("certificate-{}.txt", self.verification_id);
        let path = dir.join(filename);
        std::fs::write(&path, self.render_text())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds() {
        let cert = Certificate::new("Ali", 7);
        assert_eq!(cert.percent(), 70);
        assert!(cert.passed(70));
        assert!(!cert.passed(71));
    }

    #[test]
    fn render_includes_recipient_and_score() {
        let cert = Certificate::new("Siti Aminah", 9);
        let text = cert.render_text();
        assert!(text.contains("Siti Aminah"));
        assert!(text.contains("9/10 (90%)"));
        assert!(text.contains(&cert.verification_id.to_string()));
    }
}
