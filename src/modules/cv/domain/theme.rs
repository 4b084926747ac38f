use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Bento,
    Swiss,
    Story,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Bento, Theme::Swiss, Theme::Story];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Bento => "bento",
            Theme::Swiss => "swiss",
            Theme::Story => "story",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`, expected one of: bento, swiss, story")]
pub struct UnknownThemeError(pub String);

impl FromStr for Theme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidate = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(candidate))
            .ok_or_else(|| UnknownThemeError(s.to_string()))
    }
}
