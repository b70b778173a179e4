use chrono::{Datelike, NaiveDate};

use super::{ContentBody, ContentError};
use crate::i18n::Translations;

/// Fixed reading rate used by the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, rounded up.
///
/// Counts whitespace-separated words across the introduction, every
/// section (including code-sample text, treated as plain words), and the
/// conclusion. A body with no words yields 0; anything else yields at
/// least 1.
pub fn reading_time(body: &ContentBody) -> u32 {
    let mut words = 0usize;
    let mut count_section = |section: &super::Section| {
        words += section
            .paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum::<usize>();
        if let Some(code) = &section.code_example {
            words += code.content.split_whitespace().count();
        }
    };
    if let Some(intro) = &body.introduction {
        count_section(intro);
    }
    for section in &body.sections {
        count_section(section);
    }
    if let Some(conclusion) = &body.conclusion {
        count_section(conclusion);
    }
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Format an ISO `YYYY-MM-DD` date for display, e.g. "October 9, 2024".
///
/// Month names come from the active translation bundle so the locale is
/// injected rather than hard-coded. Unparsable input is an error, never a
/// placeholder string.
pub fn format_display_date(date: &str, translations: &Translations) -> Result<String, ContentError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ContentError::InvalidDate(date.to_string()))?;
    let month = &translations.months[parsed.month0() as usize];
    Ok(format!("{} {}, {}", month, parsed.day(), parsed.year()))
}

/// Truncate to `max_len` characters, trimming trailing whitespace and
/// appending `...`. The cut is character-exact (not at a word boundary),
/// matching the listing cards' historical behavior; text at or under the
/// limit is returned unchanged.
pub fn truncate_summary(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CodeExample, Section};

    fn section(paragraphs: &[&str]) -> Section {
        Section {
            heading: "Heading".to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            code_example: None,
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_reading_time_short_introduction() {
        let body = ContentBody {
            introduction: Some(section(&["one two three four five"])),
            ..Default::default()
        };
        assert_eq!(reading_time(&body), 1);
    }

    #[test]
    fn test_reading_time_empty_body_is_zero() {
        assert_eq!(reading_time(&ContentBody::default()), 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let body = ContentBody {
            introduction: Some(section(&[&words(201)])),
            ..Default::default()
        };
        assert_eq!(reading_time(&body), 2);
    }

    #[test]
    fn test_reading_time_counts_all_parts() {
        let body = ContentBody {
            introduction: Some(section(&[&words(100)])),
            sections: vec![Section {
                heading: "H".to_string(),
                paragraphs: vec![words(100)],
                code_example: Some(CodeExample {
                    language: "rust".to_string(),
                    content: words(100),
                }),
            }],
            conclusion: Some(section(&[&words(100)])),
            cta: None,
        };
        // 400 words at 200 wpm
        assert_eq!(reading_time(&body), 2);
    }

    #[test]
    fn test_reading_time_never_decreases_with_more_text() {
        let mut body = ContentBody {
            introduction: Some(section(&[&words(150)])),
            ..Default::default()
        };
        let before = reading_time(&body);
        body.sections.push(section(&[&words(150)]));
        assert!(reading_time(&body) >= before);
    }

    #[test]
    fn test_format_display_date() {
        let tr = Translations::default();
        assert_eq!(
            format_display_date("2024-10-09", &tr).unwrap(),
            "October 9, 2024"
        );
        assert_eq!(
            format_display_date("2023-01-31", &tr).unwrap(),
            "January 31, 2023"
        );
    }

    #[test]
    fn test_format_display_date_rejects_garbage() {
        let tr = Translations::default();
        assert_eq!(
            format_display_date("not-a-date", &tr),
            Err(ContentError::InvalidDate("not-a-date".to_string()))
        );
        assert!(format_display_date("2024-13-01", &tr).is_err());
        assert!(format_display_date("2023-02-29", &tr).is_err());
    }

    #[test]
    fn test_truncate_summary_short_text_unchanged() {
        assert_eq!(truncate_summary("short", 150), "short");
    }

    #[test]
    fn test_truncate_summary_exact_cut() {
        let long = "a".repeat(200);
        let out = truncate_summary(&long, 150);
        assert_eq!(out.chars().count(), 153);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_summary_trims_trailing_whitespace() {
        // Cut lands right after a space; the space must not survive.
        let text = format!("{} {}", "a".repeat(149), "b".repeat(50));
        let out = truncate_summary(&text, 150);
        assert_eq!(out, format!("{}...", "a".repeat(149)));
    }

    #[test]
    fn test_truncate_summary_multibyte_safe() {
        let text = "é".repeat(200);
        let out = truncate_summary(&text, 150);
        assert_eq!(out.chars().count(), 153);
    }
}
