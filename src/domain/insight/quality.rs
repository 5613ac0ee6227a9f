// src/domain/insight/quality.rs
use regex::Regex;
use std::{fmt, sync::LazyLock};

pub const MIN_DESCRIPTION_CHARS: usize = 80;
pub const MIN_JAPANESE_RATIO: f32 = 0.3;

static CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\d+(?:\s*,\s*\d+)*\]|【[^】]*†[^】]*】").expect("citation regex")
});
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank-run regex"));

#[derive(Debug, Clone, PartialEq)]
pub enum QualityIssue {
    TooShort { chars: usize, min: usize },
    WrongLanguage { japanese_ratio: f32 },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityIssue::TooShort { chars, min } => {
                write!(f, "output too short ({chars} < {min} characters)")
            }
            QualityIssue::WrongLanguage { japanese_ratio } => {
                write!(f, "output is not Japanese (ratio {japanese_ratio:.2})")
            }
        }
    }
}

/// Reject output that is too short or mostly not written in Japanese.
pub fn assess(text: &str) -> Result<(), QualityIssue> {
    let chars = text.trim().chars().count();
    if chars < MIN_DESCRIPTION_CHARS {
        return Err(QualityIssue::TooShort {
            chars,
            min: MIN_DESCRIPTION_CHARS,
        });
    }

    let ratio = japanese_ratio(text);
    if ratio < MIN_JAPANESE_RATIO {
        return Err(QualityIssue::WrongLanguage {
            japanese_ratio: ratio,
        });
    }
    Ok(())
}

/// Share of Japanese script among alphabetic characters.
pub fn japanese_ratio(text: &str) -> f32 {
    let (letters, japanese) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0u32, 0u32), |(letters, japanese), c| {
            (letters + 1, japanese + u32::from(is_japanese(c)))
        });
    if letters == 0 {
        0.0
    } else {
        japanese as f32 / letters as f32
    }
}

fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}')
}

/// Strip code fences, bold markers and citation markers left by the model.
pub fn sanitize_generated(text: &str) -> String {
    let without_fences: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect();
    let joined = without_fences.join("\n").replace("**", "");
    let uncited = CITATION.replace_all(&joined, "");
    BLANK_RUNS.replace_all(&uncited, "\n\n").trim().to_string()
}
