use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unsupported locale: {0:?}")]
    Unsupported(String),
}

impl Locale {
    pub const DEFAULT: Locale = Locale::PtBr;

    /// Every supported locale, in the order the language switcher lists them.
    pub const fn all() -> [Locale; 2] {
        [Locale::PtBr, Locale::En]
    }

    /// URL segment and catalog name for this locale.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-br",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::PtBr => "Português (BR)",
        }
    }

    /// ISO country code of the flag shown next to the language name.
    pub const fn flag(self) -> &'static str {
        match self {
            Locale::En => "US",
            Locale::PtBr => "BR",
        }
    }

    /// The flag as a pair of regional indicator symbols.
    pub fn flag_emoji(self) -> String {
        self.flag()
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }

    /// Parses a URL segment. Matching is exact: `"EN"` or `"pt"` are not
    /// supported locales and never fall back to the default.
    pub fn from_code(code: &str) -> Result<Self, LocaleError> {
        Self::all()
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| LocaleError::Unsupported(code.to_string()))
    }

    fn from_language_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let primary = tag.split('-').next().unwrap_or_default();
        match primary {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::PtBr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Builds the href for an in-app `path` under `locale`.
///
/// `path` is written the way the app refers to pages without a locale:
/// `"/"`, `"/contact"`, `"/#skills"`. The fragment is kept as is.
pub fn localized_href(locale: Locale, path: &str) -> String {
    let (path, fragment) = match path.find('#') {
        Some(i) => (&path[..i], &path[i..]),
        None => (path, ""),
    };
    let path = path.trim_end_matches('/');
    let path = if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("/{}{}{}", locale.code(), path, fragment)
}

/// Splits a browser pathname into its locale segment and the in-app rest.
///
/// The rest always starts with `/`. When the first segment is not a
/// supported locale the locale is `None` and the whole pathname is returned.
pub fn split_locale(pathname: &str) -> (Option<Locale>, &str) {
    let trimmed = pathname.strip_prefix('/').unwrap_or(pathname);
    let (segment, rest) = match trimmed.find('/') {
        Some(i) => (&trimmed[..i], &trimmed[i..]),
        None => (trimmed, "/"),
    };
    match Locale::from_code(segment) {
        Ok(locale) => (Some(locale), rest),
        Err(_) => (None, pathname),
    }
}

/// Path that shows the page at `pathname` in `target`.
///
/// Returns `pathname` untouched when it is already under `target`, so
/// switching to the active locale is a no-op.
pub fn switch_locale_path(pathname: &str, target: Locale) -> String {
    match split_locale(pathname) {
        (Some(current), _) if current == target => pathname.to_string(),
        (_, rest) => localized_href(target, rest),
    }
}

/// Picks the preferred supported locale from an `Accept-Language` header.
///
/// Entries are ranked by q-value; ties keep header order. Falls back to
/// [`Locale::DEFAULT`] when nothing matches.
pub fn negotiate(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::DEFAULT;
    };
    let mut best: Option<(Locale, f32)> = None;
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default();
        let q = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
            .unwrap_or(1.0);
        if q <= 0.0 {
            continue;
        }
        let Some(locale) = Locale::from_language_tag(tag) else {
            continue;
        };
        if best.is_none_or(|(_, best_q)| q > best_q) {
            best = Some((locale, q));
        }
    }
    best.map(|(l, _)| l).unwrap_or(Locale::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_locales_parse() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Ok(locale));
        }
        assert_eq!(Locale::DEFAULT, Locale::PtBr);
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(Locale::En.flag_emoji(), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(Locale::PtBr.flag_emoji(), "\u{1F1E7}\u{1F1F7}");
    }

    #[test]
    fn test_unsupported_locales_rejected() {
        for code in ["fr", "EN", "pt", "PT-BR", "", "en-us", "contact"] {
            assert_eq!(
                Locale::from_code(code),
                Err(LocaleError::Unsupported(code.to_string()))
            );
        }
    }

    #[test]
    fn test_localized_href() {
        assert_eq!(localized_href(Locale::En, "/"), "/en");
        assert_eq!(localized_href(Locale::En, "/contact"), "/en/contact");
        assert_eq!(localized_href(Locale::PtBr, "/#skills"), "/pt-br#skills");
        assert_eq!(localized_href(Locale::PtBr, "contact"), "/pt-br/contact");
        assert_eq!(localized_href(Locale::En, ""), "/en");
    }

    #[test]
    fn test_split_locale() {
        assert_eq!(split_locale("/en"), (Some(Locale::En), "/"));
        assert_eq!(split_locale("/pt-br/contact"), (Some(Locale::PtBr), "/contact"));
        assert_eq!(split_locale("/fr/contact"), (None, "/fr/contact"));
        assert_eq!(split_locale("/"), (None, "/"));
    }

    #[test]
    fn test_switch_to_same_locale_is_noop() {
        for path in ["/en", "/en/contact", "/en/"] {
            assert_eq!(switch_locale_path(path, Locale::En), path);
        }
        assert_eq!(switch_locale_path("/pt-br/contact", Locale::PtBr), "/pt-br/contact");
    }

    #[test]
    fn test_switch_keeps_in_app_path() {
        assert_eq!(switch_locale_path("/en/contact", Locale::PtBr), "/pt-br/contact");
        assert_eq!(switch_locale_path("/pt-br", Locale::En), "/en");
        // twice is the same as once
        let once = switch_locale_path("/pt-br/contact", Locale::En);
        assert_eq!(switch_locale_path(&once, Locale::En), once);
    }

    #[test]
    fn test_negotiate() {
        assert_eq!(negotiate(None), Locale::PtBr);
        assert_eq!(negotiate(Some("en-US,en;q=0.9")), Locale::En);
        assert_eq!(negotiate(Some("pt-BR,pt;q=0.9,en;q=0.8")), Locale::PtBr);
        assert_eq!(negotiate(Some("de-DE,en;q=0.5,pt;q=0.7")), Locale::PtBr);
        assert_eq!(negotiate(Some("fr,de;q=0.9")), Locale::PtBr);
        assert_eq!(negotiate(Some("en;q=0,pt;q=0.1")), Locale::PtBr);
        assert_eq!(negotiate(Some("pt;q=0, en;q=0.2")), Locale::En);
    }
}
