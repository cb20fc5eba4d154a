//! Mood journal labels
//!
//! A mood entry is stored as plain text of the form
//! `"<emoji> <Label> - YYYY-MM-DD HH:MM"`, e.g. `"😊 Happy - 2024-01-01 09:00"`.
//! Parsing is best effort: free-form labels simply don't parse.

use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Timestamp layout used inside mood labels
pub const MOOD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Excited,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Excited,
        Mood::Tired,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Calm => "😌",
            Mood::Excited => "🤩",
            Mood::Tired => "😴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Tired => "Tired",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.label().to_lowercase() == normalized || m.emoji() == s.trim())
            .ok_or_else(|| {
                format!(
                    "Invalid mood: '{}'. Valid moods are: happy, sad, angry, calm, excited, tired",
                    s
                )
            })
    }
}

/// A mood label split back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    pub mood: Mood,
    pub at: NaiveDateTime,
}

impl MoodEntry {
    pub fn new(mood: Mood, at: NaiveDateTime) -> Self {
        MoodEntry { mood, at }
    }

    /// Render as the stored entry text
    pub fn to_text(&self) -> String {
        format!("{} - {}", self.mood, self.at.format(MOOD_TIME_FORMAT))
    }

    /// Recover mood and timestamp from stored entry text
    pub fn parse(text: &str) -> Option<Self> {
        let caps = mood_regex().captures(text.trim())?;
        let mood = Mood::from_str(&caps["label"]).ok()?;
        if &caps["emoji"] != mood.emoji() {
            return None;
        }
        let at = NaiveDateTime::parse_from_str(&caps["at"], MOOD_TIME_FORMAT).ok()?;
        Some(MoodEntry { mood, at })
    }
}

fn mood_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?P<emoji>\S+)\s+(?P<label>[A-Za-z]+)\s+-\s+(?P<at>\d{4}-\d{2}-\d{2} \d{2}:\d{2})$")
            .unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_to_text() {
        let entry = MoodEntry::new(Mood::Happy, at(2024, 1, 1, 9, 0));
        assert_eq!(entry.to_text(), "😊 Happy - 2024-01-01 09:00");
    }

    #[test]
    fn test_parse_stored_label() {
        let entry = MoodEntry::parse("😊 Happy - 2024-01-01 09:00").unwrap();
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.at, at(2024, 1, 1, 9, 0));
    }

    #[test]
    fn test_parse_every_mood_back() {
        for mood in Mood::ALL {
            let entry = MoodEntry::new(mood, at(2025, 3, 14, 22, 5));
            assert_eq!(MoodEntry::parse(&entry.to_text()), Some(entry));
        }
    }

    #[test]
    fn test_parse_free_form_is_none() {
        assert_eq!(MoodEntry::parse("felt okay today"), None);
        assert_eq!(MoodEntry::parse("😊 Happy - yesterday"), None);
        assert_eq!(MoodEntry::parse("🙃 Meh - 2024-01-01 09:00"), None);
    }

    #[test]
    fn test_parse_rejects_mismatched_emoji() {
        assert_eq!(MoodEntry::parse("😢 Happy - 2024-01-01 09:00"), None);
        assert_eq!(MoodEntry::parse("😊 Sad - 2024-01-01 09:00"), None);
    }

    #[test]
    fn test_mood_from_str() {
        assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str(" TIRED ").unwrap(), Mood::Tired);
        assert_eq!(Mood::from_str("😠").unwrap(), Mood::Angry);
        assert!(Mood::from_str("meh").unwrap_err().contains("Invalid mood"));
    }
}
