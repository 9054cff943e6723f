use clap::ValueEnum;
use layout_form::{Form, LayoutError};
use layout_form_html::HtmlOptions;

use crate::{sign_in_form, sign_up_form};

/// The two demo pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    /// Account creation, validated as the user types.
    SignUp,
    /// Sign in with an existing account, validated on blur and submit.
    SignIn,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::SignUp => "Sign up",
            Self::SignIn => "Sign in",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SignUp => "Nice to meet you",
            Self::SignIn => "Welcome back",
        }
    }

    /// Secondary line pointing at the other page.
    pub fn note(self) -> &'static str {
        match self {
            Self::SignUp => "Already have an account? Sign in",
            Self::SignIn => "Don't have an account? Sign up",
        }
    }

    /// Build a fresh form for this page, with its logging submit handler.
    pub fn form(self) -> Result<Form, LayoutError> {
        match self {
            Self::SignUp => sign_up_form(),
            Self::SignIn => sign_in_form(),
        }
    }

    /// HTML options carrying this page's chrome.
    pub fn html_options(self) -> HtmlOptions {
        HtmlOptions::new()
            .with_title(self.title())
            .with_description(self.description())
            .with_note(self.note())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome() {
        let options = Page::SignUp.html_options();
        assert_eq!(options.title.as_deref(), Some("Sign up"));
        assert_eq!(options.description.as_deref(), Some("Nice to meet you"));
        assert_eq!(
            options.note.as_deref(),
            Some("Already have an account? Sign in")
        );

        assert_eq!(Page::SignIn.title(), "Sign in");
        assert_eq!(Page::SignIn.description(), "Welcome back");
    }

    #[test]
    fn every_page_builds() {
        for page in Page::value_variants() {
            assert!(page.form().is_ok(), "{page:?} failed to build");
        }
    }
}
