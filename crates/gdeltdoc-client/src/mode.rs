use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Query shapes understood by the DOC API (`mode=` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    ArtList,
    TimelineVol,
    /// Raw article counts; every point also carries the total number of
    /// articles monitored in its `norm` field.
    TimelineVolRaw,
    TimelineTone,
    TimelineLang,
    TimelineSourceCountry,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::ArtList,
        Mode::TimelineVol,
        Mode::TimelineVolRaw,
        Mode::TimelineTone,
        Mode::TimelineLang,
        Mode::TimelineSourceCountry,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::ArtList => "artlist",
            Mode::TimelineVol => "timelinevol",
            Mode::TimelineVolRaw => "timelinevolraw",
            Mode::TimelineTone => "timelinetone",
            Mode::TimelineLang => "timelinelang",
            Mode::TimelineSourceCountry => "timelinesourcecountry",
        }
    }

    #[must_use]
    pub const fn is_timeline(self) -> bool {
        !matches!(self, Mode::ArtList)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| ValidationError::UnsupportedMode(s.to_string()))
    }
}
