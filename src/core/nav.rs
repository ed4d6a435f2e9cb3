//! Navigation affordance shown next to the title.

use crate::core::error::ChromeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavMode {
    #[default]
    None,
    Back,
    Menu,
    Close,
}

const NAV_KEYWORDS: &[(&str, NavMode)] = &[
    ("none", NavMode::None),
    ("back", NavMode::Back),
    ("menu", NavMode::Menu),
    ("close", NavMode::Close),
];

impl NavMode {
    /// Resolves a `nav` keyword, case-insensitively. Absent or empty means `None`.
    pub fn resolve(keyword: Option<&str>) -> Result<Self, ChromeError> {
        let keyword = match keyword {
            None => return Ok(NavMode::None),
            Some(k) if k.is_empty() => return Ok(NavMode::None),
            Some(k) => k,
        };
        NAV_KEYWORDS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(keyword))
            .map(|(_, mode)| *mode)
            .ok_or_else(|| ChromeError::InvalidNavigationType(keyword.to_string()))
    }

    pub fn keyword(self) -> &'static str {
        NAV_KEYWORDS
            .iter()
            .find(|(_, mode)| *mode == self)
            .map(|(key, _)| *key)
            .unwrap_or("none")
    }

    /// Whether the back/up affordance should be displayed.
    pub fn shows_affordance(self) -> bool {
        self != NavMode::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        for k in ["Back", "BACK", "back"] {
            assert_eq!(NavMode::resolve(Some(k)).unwrap(), NavMode::Back);
        }
        assert_eq!(NavMode::resolve(Some("CLOSE")).unwrap(), NavMode::Close);
        assert_eq!(NavMode::resolve(Some("Menu")).unwrap(), NavMode::Menu);
    }

    #[test]
    fn test_absent_and_empty_are_none() {
        assert_eq!(NavMode::resolve(None).unwrap(), NavMode::None);
        assert_eq!(NavMode::resolve(Some("")).unwrap(), NavMode::None);
        assert_eq!(NavMode::resolve(Some("none")).unwrap(), NavMode::None);
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        for k in ["bogus", "cancel", " back"] {
            assert_eq!(
                NavMode::resolve(Some(k)),
                Err(ChromeError::InvalidNavigationType(k.to_string()))
            );
        }
    }

    #[test]
    fn test_keyword_and_affordance() {
        assert_eq!(NavMode::Close.keyword(), "close");
        assert!(!NavMode::None.shows_affordance());
        assert!(NavMode::Back.shows_affordance());
    }
}
