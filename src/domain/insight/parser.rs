// src/domain/insight/parser.rs
//! Line-oriented extraction of `### Title` sections from generated text.
//!
//! Each section may carry fixed-label fields. Scalar labels take the value
//! after the colon; list labels switch the reader into a mode where following
//! bullet lines are collected. Lines that match nothing are ignored, and a
//! field whose label the model misspelled is simply absent.

use std::collections::BTreeMap;

use super::entity::{FacilityProfile, QaPair};

const SECTION_MARKER: &str = "###";
const BULLETS: &[char] = &['-', '*', '・', '•'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Address,
    Phone,
    Rating,
    ReviewCount,
    Reviews,
    Qa,
    OwnerMessages,
}

const LABELS: &[(&str, Field)] = &[
    // Longer labels first so `口コミ数` is not read as `口コミ`.
    ("オーナーからのメッセージ", Field::OwnerMessages),
    ("owner message", Field::OwnerMessages),
    ("owner posts", Field::OwnerMessages),
    ("よくある質問", Field::Qa),
    ("review count", Field::ReviewCount),
    ("電話番号", Field::Phone),
    ("口コミ数", Field::ReviewCount),
    ("レビュー数", Field::ReviewCount),
    ("口コミ", Field::Reviews),
    ("レビュー", Field::Reviews),
    ("reviews", Field::Reviews),
    ("address", Field::Address),
    ("rating", Field::Rating),
    ("phone", Field::Phone),
    ("posts", Field::OwnerMessages),
    ("住所", Field::Address),
    ("電話", Field::Phone),
    ("評価", Field::Rating),
    ("投稿", Field::OwnerMessages),
    ("q&a", Field::Qa),
    ("faq", Field::Qa),
];

/// Parse every `### Title` section into a profile keyed by title.
/// On duplicate titles the first section wins.
pub fn parse_facility_sections(text: &str) -> BTreeMap<String, FacilityProfile> {
    let mut sections = BTreeMap::new();
    let mut current: Option<SectionReader> = None;

    for line in text.lines() {
        if let Some(title) = section_title(line) {
            if let Some(reader) = current.take() {
                let profile = reader.finish();
                sections.entry(profile.title.clone()).or_insert(profile);
            }
            current = (!title.is_empty()).then(|| SectionReader::new(title));
            continue;
        }
        if let Some(reader) = current.as_mut() {
            reader.feed(line);
        }
    }

    if let Some(reader) = current {
        let profile = reader.finish();
        sections.entry(profile.title.clone()).or_insert(profile);
    }

    sections
}

struct SectionReader {
    profile: FacilityProfile,
    mode: Option<Field>,
    pending_question: Option<String>,
}

impl SectionReader {
    fn new(title: String) -> Self {
        Self {
            profile: FacilityProfile::new(title),
            mode: None,
            pending_question: None,
        }
    }

    fn feed(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        let is_bullet = trimmed.starts_with(BULLETS);
        let line = strip_decoration(trimmed);

        if let Some((field, value)) = match_label(&line) {
            self.pending_question = None;
            self.apply_label(field, value);
            return;
        }

        if self.feed_qa(&line) {
            return;
        }

        match self.mode {
            Some(Field::Reviews) if is_bullet => push_non_empty(&mut self.profile.reviews, &line),
            Some(Field::OwnerMessages) if is_bullet => {
                push_non_empty(&mut self.profile.owner_messages, &line);
            }
            _ => {}
        }
    }

    fn apply_label(&mut self, field: Field, value: &str) {
        let value = value.trim();
        match field {
            Field::Address => {
                self.mode = None;
                self.profile.address = non_empty(value);
            }
            Field::Phone => {
                self.mode = None;
                self.profile.phone = non_empty(value);
            }
            Field::Rating => {
                self.mode = None;
                self.profile.rating = parse_rating(value);
            }
            Field::ReviewCount => {
                self.mode = None;
                self.profile.review_count = parse_count(value);
            }
            Field::Reviews => {
                self.mode = Some(Field::Reviews);
                push_non_empty(&mut self.profile.reviews, value);
            }
            Field::OwnerMessages => {
                self.mode = Some(Field::OwnerMessages);
                push_non_empty(&mut self.profile.owner_messages, value);
            }
            Field::Qa => self.mode = Some(Field::Qa),
        }
    }

    /// `Q:`/`A:` lines are read anywhere in a section; a FAQ label is not
    /// required. Returns false for any other line.
    fn feed_qa(&mut self, line: &str) -> bool {
        if let Some(question) = strip_qa_marker(line, &["q", "質問", "問"]) {
            self.pending_question = non_empty(question);
            return true;
        }
        if let Some(answer) = strip_qa_marker(line, &["a", "回答", "答"]) {
            if let (Some(question), Some(answer)) = (self.pending_question.take(), non_empty(answer)) {
                self.profile.qa.push(QaPair { question, answer });
            }
            return true;
        }
        // Anything else breaks a pending pair.
        self.pending_question = None;
        false
    }

    fn finish(self) -> FacilityProfile {
        self.profile
    }
}

fn section_title(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix(SECTION_MARKER)?;
    if rest.starts_with('#') {
        return None;
    }
    let title = strip_decoration(rest.trim());
    Some(strip_enumerator(&title).trim().to_string())
}

/// Drop a leading `1.`, `2)` or `3．` list number. Digits that are part of
/// the name (`3丁目斎場`) stay.
fn strip_enumerator(title: &str) -> &str {
    let rest = title.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == title.len() {
        return title;
    }
    rest.strip_prefix(['.', ')', '．']).unwrap_or(title)
}

/// Drop bullets, bold/italic markers and surrounding whitespace.
fn strip_decoration(line: &str) -> String {
    let without_bullet = line.trim_start_matches(BULLETS).trim_start();
    without_bullet.replace("**", "").replace("__", "").trim().to_string()
}

fn match_label(line: &str) -> Option<(Field, &str)> {
    let (label, value) = split_label(line)?;
    let label = label.trim().to_lowercase();
    LABELS
        .iter()
        .find(|(name, _)| label == *name)
        .map(|(_, field)| (*field, value))
}

/// Split `label: value` on the first ASCII or full-width colon.
fn split_label(line: &str) -> Option<(&str, &str)> {
    let idx = line.find([':', '：'])?;
    let colon_len = line[idx..].chars().next().map_or(1, char::len_utf8);
    Some((&line[..idx], &line[idx + colon_len..]))
}

fn strip_qa_marker<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
    let (label, value) = split_label(line)?;
    let label = label.trim().to_lowercase();
    let label = label.trim_end_matches(|c: char| c.is_ascii_digit()).trim();
    markers.contains(&label).then_some(value.trim())
}

fn parse_rating(value: &str) -> Option<f32> {
    let number: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    number.parse::<f32>().ok().filter(|r| (0.0..=5.0).contains(r))
}

fn parse_count(value: &str) -> Option<u32> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn push_non_empty(list: &mut Vec<String>, value: &str) {
    if let Some(value) = non_empty(value) {
        list.push(value);
    }
}
