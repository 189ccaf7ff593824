//! Instruction text and its two-column (marker / content) layout.

use crate::config::GeneratorConfig;
use crate::i18n::Direction;
use crate::styles::{self, Section};
use once_cell::sync::Lazy;
use regex::Regex;

/// Visual category of an instruction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Plain,
    Section(Section),
}

impl LineStyle {
    pub fn style_name(self) -> &'static str {
        match self {
            LineStyle::Title => styles::INSTRUCTION_HEADER,
            LineStyle::Plain => styles::INSTRUCTION_CELL,
            LineStyle::Section(section) => section.style_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineText {
    Blank,
    Static(&'static str),
    /// Label followed by the template version.
    Version(&'static str),
    /// Label followed by the release date.
    Updated(&'static str),
    SupportEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionLine {
    pub text: LineText,
    pub style: LineStyle,
}

impl InstructionLine {
    pub fn render(&self, config: &GeneratorConfig) -> String {
        match self.text {
            LineText::Blank => String::new(),
            LineText::Static(text) => text.to_string(),
            LineText::Version(label) => format!("{label}{}", config.version),
            LineText::Updated(label) => format!("{label}{}", config.display_date()),
            LineText::SupportEmail => config.support_email.clone(),
        }
    }
}

pub const fn blank() -> InstructionLine {
    InstructionLine {
        text: LineText::Blank,
        style: LineStyle::Plain,
    }
}

pub const fn title(text: &'static str) -> InstructionLine {
    InstructionLine {
        text: LineText::Static(text),
        style: LineStyle::Title,
    }
}

pub const fn section(section: Section, text: &'static str) -> InstructionLine {
    InstructionLine {
        text: LineText::Static(text),
        style: LineStyle::Section(section),
    }
}

pub const fn note(text: &'static str) -> InstructionLine {
    section(Section::Notes, text)
}

pub const fn version(label: &'static str) -> InstructionLine {
    InstructionLine {
        text: LineText::Version(label),
        style: LineStyle::Section(Section::Main),
    }
}

pub const fn updated(label: &'static str) -> InstructionLine {
    InstructionLine {
        text: LineText::Updated(label),
        style: LineStyle::Section(Section::Main),
    }
}

pub const fn support_email() -> InstructionLine {
    InstructionLine {
        text: LineText::SupportEmail,
        style: LineStyle::Section(Section::Notes),
    }
}

static RTL_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s+\.(\d+)$").unwrap());
static RTL_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s+\.([א-ת])$").unwrap());
static RTL_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s+-$").unwrap());
static LTR_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[.)] (.*)").unwrap());
static LTR_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-g])[.)] (.*)").unwrap());
static LTR_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.*)").unwrap());

/// Splits a line into its list marker (number, letter or dash) and content.
///
/// Right-to-left text carries the marker at the end (`"צבעים .5"` gives
/// `(".5", "צבעים")`), left-to-right text at the start (`"5. Colors"` gives
/// `("5.", "Colors")`). Lines without a recognised marker return an empty one.
pub fn split_marker(direction: Direction, text: &str) -> (String, String) {
    match direction {
        Direction::Rtl => {
            if let Some(caps) = RTL_NUMBER.captures(text) {
                return (format!(".{}", &caps[2]), caps[1].to_string());
            }
            if let Some(caps) = RTL_LETTER.captures(text) {
                return (format!(".{}", &caps[2]), caps[1].to_string());
            }
            if let Some(caps) = RTL_DASH.captures(text) {
                return ("-".to_string(), caps[1].to_string());
            }
        }
        Direction::Ltr => {
            if let Some(caps) = LTR_NUMBER.captures(text) {
                return (format!("{}.", &caps[1]), caps[2].to_string());
            }
            if let Some(caps) = LTR_LETTER.captures(text) {
                return (format!("{}.", &caps[1]), caps[2].to_string());
            }
            if let Some(caps) = LTR_DASH.captures(text) {
                return ("-".to_string(), caps[1].to_string());
            }
        }
    }
    (String::new(), text.to_string())
}

/// `split_marker` plus the right-to-left colon rule: a line with a colon and
/// no marker is shown with a dash.
pub fn marker_and_content(direction: Direction, text: &str) -> (String, String) {
    let (mut marker, content) = split_marker(direction, text);
    if direction == Direction::Rtl && marker.is_empty() && content.contains(':') {
        marker = "-".to_string();
    }
    (marker, content)
}

/// A laid-out instruction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRow {
    pub row: u32,
    pub marker: String,
    pub content: String,
    pub style: &'static str,
}

/// Lays out `lines` one per row, starting at row 1.
pub fn layout_lines(
    lines: &[InstructionLine],
    direction: Direction,
    config: &GeneratorConfig,
) -> Vec<InstructionRow> {
    lines
        .iter()
        .zip(1u32..)
        .map(|(line, row)| {
            let (marker, content) = marker_and_content(direction, &line.render(config));
            InstructionRow {
                row,
                marker,
                content,
                style: line.style.style_name(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(direction: Direction, text: &str) -> (String, String) {
        split_marker(direction, text)
    }

    #[test]
    fn test_rtl_markers() {
        assert_eq!(
            split(Direction::Rtl, "צבעים - ניהול צבעים זמינים .5"),
            (".5".into(), "צבעים - ניהול צבעים זמינים".into())
        );
        assert_eq!(
            split(Direction::Rtl, "קטגוריות משנה .ב"),
            (".ב".into(), "קטגוריות משנה".into())
        );
        assert_eq!(
            split(Direction::Rtl, "שם: שם החברה -"),
            ("-".into(), "שם: שם החברה".into())
        );
        assert_eq!(
            split(Direction::Rtl, "תמיכה:"),
            (String::new(), "תמיכה:".into())
        );
    }

    #[test]
    fn test_ltr_markers() {
        assert_eq!(
            split(Direction::Ltr, "3. Main Categories - Manage"),
            ("3.".into(), "Main Categories - Manage".into())
        );
        assert_eq!(
            split(Direction::Ltr, "b) Sub Categories"),
            ("b.".into(), "Sub Categories".into())
        );
        assert_eq!(
            split(Direction::Ltr, "- Name: Company name"),
            ("-".into(), "Name: Company name".into())
        );
        // only a-g count as letter markers
        assert_eq!(
            split(Direction::Ltr, "h. Hidden"),
            (String::new(), "h. Hidden".into())
        );
        assert_eq!(
            split(Direction::Ltr, "   a. Indented"),
            (String::new(), "   a. Indented".into())
        );
    }

    #[test]
    fn test_rtl_colon_gets_dash() {
        assert_eq!(
            marker_and_content(Direction::Rtl, "מבנה הקובץ:"),
            ("-".into(), "מבנה הקובץ:".into())
        );
        // explicit markers win
        assert_eq!(
            marker_and_content(Direction::Rtl, "קוד התחלתי בספקים: מספור .6"),
            (".6".into(), "קוד התחלתי בספקים: מספור".into())
        );
    }

    #[test]
    fn test_ltr_colon_keeps_empty_marker() {
        assert_eq!(
            marker_and_content(Direction::Ltr, "File Structure:"),
            (String::new(), "File Structure:".into())
        );
    }

    #[test]
    fn test_layout_lines_renders_placeholders() {
        let config = GeneratorConfig::default();
        let lines = [blank(), version("Version: "), updated("Last Updated: "), support_email()];
        let rows = layout_lines(&lines, Direction::Ltr, &config);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].content, "");
        assert_eq!(rows[0].style, styles::INSTRUCTION_CELL);
        assert_eq!(rows[1].content, "Version: 1.0.0");
        assert_eq!(rows[1].style, "section_main_style");
        assert_eq!(rows[2].content, "Last Updated: 30/03/2025");
        assert_eq!(rows[3].content, "support@flexipi.com");
    }
}
