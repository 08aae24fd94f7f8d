use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentState {
    #[default]
    Undecided,
    Accepted,
    Declined,
}

/// What the page shows for a given consent decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentView {
    Prompt,
    Hidden,
    ErrorPage,
}

impl ConsentState {
    pub const PROMPT_TEXT: &'static str = "This site uses cookies to ensure the best user experience. By continuing, you accept the use of cookies.";

    pub fn view(&self) -> ConsentView {
        match self {
            ConsentState::Undecided => ConsentView::Prompt,
            ConsentState::Accepted => ConsentView::Hidden,
            ConsentState::Declined => ConsentView::ErrorPage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views() {
        assert_eq!(ConsentState::Undecided.view(), ConsentView::Prompt);
        assert_eq!(ConsentState::Accepted.view(), ConsentView::Hidden);
        assert_eq!(ConsentState::Declined.view(), ConsentView::ErrorPage);
    }

    #[test]
    fn test_default_is_undecided() {
        assert_eq!(ConsentState::default(), ConsentState::Undecided);
    }
}
