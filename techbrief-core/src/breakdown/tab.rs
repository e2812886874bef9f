//! Detail panel tabs.

use std::fmt;
use std::str::FromStr;

/// Which view the detail panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    #[default]
    Details,
    Metadata,
    Links,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Details, DetailTab::Metadata, DetailTab::Links];

    pub fn index(self) -> usize {
        match self {
            DetailTab::Details => 0,
            DetailTab::Metadata => 1,
            DetailTab::Links => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Details => "Details",
            DetailTab::Metadata => "Metadata",
            DetailTab::Links => "Links",
        }
    }

    pub fn next(self) -> DetailTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> DetailTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "details" => Ok(DetailTab::Details),
            "metadata" => Ok(DetailTab::Metadata),
            "links" => Ok(DetailTab::Links),
            other => Err(format!("unknown tab '{other}' (expected details, metadata or links)")),
        }
    }
}
