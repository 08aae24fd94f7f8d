use serde::{Deserialize, Serialize};

/// The banner link flips between two labels on every click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkLabel {
    #[default]
    Links,
    Rechts,
}

impl LinkLabel {
    pub fn toggle(&mut self) {
        *self = match self {
            LinkLabel::Links => LinkLabel::Rechts,
            LinkLabel::Rechts => LinkLabel::Links,
        };
    }

    pub fn text(&self) -> &'static str {
        match self {
            LinkLabel::Links => "links",
            LinkLabel::Rechts => "rechts",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessResult {
    Granted { destination: String },
    Denied,
}

/// Opens `destination` for visitors who know the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGate {
    pub code: String,
    pub destination: String,
}

impl AccessGate {
    pub const DENIED_MESSAGE: &'static str = "INCORRECT CODE!";

    pub fn check(&self, entered: &str) -> AccessResult {
        if !self.code.is_empty() && entered == self.code {
            AccessResult::Granted {
                destination: self.destination.clone(),
            }
        } else {
            AccessResult::Denied
        }
    }
}
