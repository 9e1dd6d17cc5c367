//! Light/dark theme preference.
//!
//! The `theme` cookie is the single source of truth. It is read in one
//! place ([`Theme::from_request`]) and written in one place (the toggle
//! route); templates receive the resolved value through the context.

use std::fmt;
use std::str::FromStr;

use actix_web::HttpRequest;
use serde::Serialize;

pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Resolves the visitor's preference from the request cookie; anything
    /// unrecognized falls back to light.
    pub fn from_request(req: &HttpRequest) -> Self {
        req.cookie(THEME_COOKIE)
            .and_then(|c| c.value().parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
