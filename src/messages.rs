//! Per-locale message catalogs and the typed keys used to read them.
//!
//! Catalogs are the JSON files under `messages/`, embedded at compile time.
//! Nested objects are flattened into dotted paths (`Contact.email.title`).
//! `build.rs` refuses to build when the catalogs do not share the same key
//! set, and [`Messages::get`] reports a missing key as an error instead of
//! silently rendering nothing.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::content::{ContactId, ProjectId, SkillCategory};
use crate::locale::Locale;

pub static GLOBAL_CATALOG_CACHE: LazyLock<DashMap<Locale, Arc<Messages>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "messages"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Catalogs;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageError {
    #[error("no message catalog for locale {0}")]
    CatalogMissing(String),
    #[error("couldn't parse message catalog: {0}")]
    Parse(String),
    #[error("missing message {key} for locale {locale}")]
    MissingKey { locale: String, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroKey {
    Badge,
    Greeting,
    Title,
    Description,
    ContactButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillsKey {
    Title,
    TitleHighlight,
    Description,
    Category(SkillCategory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectsKey {
    Title,
    TitleHighlight,
    Description,
    ProjectTitle(ProjectId),
    ProjectDesc(ProjectId),
    SeeMore,
    SeeLess,
    Code,
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodField {
    Title,
    Description,
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferencesField {
    Title,
    Description,
    ResponseTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKey {
    Title,
    TitleHighlight,
    Description,
    Method(ContactId, MethodField),
    Preferences(PreferencesField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKey {
    Home,
    About,
    Skills,
    Learning,
    Projects,
    ViewProjects,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterKey {
    Description,
    Navigation,
    Connect,
    Rights,
}

/// Every string the site reads from a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Hero(HeroKey),
    Skills(SkillsKey),
    Projects(ProjectsKey),
    Contact(ContactKey),
    Header(HeaderKey),
    Footer(FooterKey),
}

impl MessageKey {
    /// Dotted catalog path, e.g. `Projects.project2Desc`.
    pub fn path(&self) -> String {
        match self {
            MessageKey::Hero(k) => format!(
                "Hero.{}",
                match k {
                    HeroKey::Badge => "badge",
                    HeroKey::Greeting => "greeting",
                    HeroKey::Title => "title",
                    HeroKey::Description => "description",
                    HeroKey::ContactButton => "contactButton",
                }
            ),
            MessageKey::Skills(k) => format!(
                "Skills.{}",
                match k {
                    SkillsKey::Title => "title",
                    SkillsKey::TitleHighlight => "titleHighlight",
                    SkillsKey::Description => "description",
                    SkillsKey::Category(c) => c.catalog_key(),
                }
            ),
            MessageKey::Projects(k) => {
                let name = match k {
                    ProjectsKey::Title => "title".to_string(),
                    ProjectsKey::TitleHighlight => "titleHighlight".to_string(),
                    ProjectsKey::Description => "description".to_string(),
                    ProjectsKey::ProjectTitle(id) => format!("{}Title", id.catalog_prefix()),
                    ProjectsKey::ProjectDesc(id) => format!("{}Desc", id.catalog_prefix()),
                    ProjectsKey::SeeMore => "seeMore".to_string(),
                    ProjectsKey::SeeLess => "seeLess".to_string(),
                    ProjectsKey::Code => "code".to_string(),
                    ProjectsKey::Demo => "demo".to_string(),
                };
                format!("Projects.{name}")
            }
            MessageKey::Contact(k) => match k {
                ContactKey::Title => "Contact.title".to_string(),
                ContactKey::TitleHighlight => "Contact.titleHighlight".to_string(),
                ContactKey::Description => "Contact.description".to_string(),
                ContactKey::Method(id, field) => format!(
                    "Contact.{}.{}",
                    id.catalog_key(),
                    match field {
                        MethodField::Title => "title",
                        MethodField::Description => "description",
                        MethodField::Action => "action",
                    }
                ),
                ContactKey::Preferences(field) => format!(
                    "Contact.preferences.{}",
                    match field {
                        PreferencesField::Title => "title",
                        PreferencesField::Description => "description",
                        PreferencesField::ResponseTime => "responseTime",
                    }
                ),
            },
            MessageKey::Header(k) => format!(
                "Header.{}",
                match k {
                    HeaderKey::Home => "home",
                    HeaderKey::About => "about",
                    HeaderKey::Skills => "skills",
                    HeaderKey::Learning => "learning",
                    HeaderKey::Projects => "projects",
                    HeaderKey::ViewProjects => "viewProjects",
                    HeaderKey::Contact => "contact",
                }
            ),
            MessageKey::Footer(k) => format!(
                "Footer.{}",
                match k {
                    FooterKey::Description => "description",
                    FooterKey::Navigation => "navigation",
                    FooterKey::Connect => "connect",
                    FooterKey::Rights => "rights",
                }
            ),
        }
    }

    /// The complete, finite set of keys the site can ask for.
    pub fn all() -> Vec<MessageKey> {
        use MessageKey as K;

        let mut keys = vec![];
        keys.extend(
            [
                HeroKey::Badge,
                HeroKey::Greeting,
                HeroKey::Title,
                HeroKey::Description,
                HeroKey::ContactButton,
            ]
            .map(K::Hero),
        );
        keys.extend([SkillsKey::Title, SkillsKey::TitleHighlight, SkillsKey::Description].map(K::Skills));
        keys.extend(SkillCategory::all().map(|c| K::Skills(SkillsKey::Category(c))));
        keys.extend(
            [
                ProjectsKey::Title,
                ProjectsKey::TitleHighlight,
                ProjectsKey::Description,
                ProjectsKey::SeeMore,
                ProjectsKey::SeeLess,
                ProjectsKey::Code,
                ProjectsKey::Demo,
            ]
            .map(K::Projects),
        );
        for id in [ProjectId::EmptyScan, ProjectId::Palato] {
            keys.push(K::Projects(ProjectsKey::ProjectTitle(id)));
            keys.push(K::Projects(ProjectsKey::ProjectDesc(id)));
        }
        keys.extend([ContactKey::Title, ContactKey::TitleHighlight, ContactKey::Description].map(K::Contact));
        for id in [ContactId::Email, ContactId::Discord] {
            for field in [MethodField::Title, MethodField::Description, MethodField::Action] {
                keys.push(K::Contact(ContactKey::Method(id, field)));
            }
        }
        keys.extend(
            [
                PreferencesField::Title,
                PreferencesField::Description,
                PreferencesField::ResponseTime,
            ]
            .map(|f| K::Contact(ContactKey::Preferences(f))),
        );
        keys.extend(
            [
                HeaderKey::Home,
                HeaderKey::About,
                HeaderKey::Skills,
                HeaderKey::Learning,
                HeaderKey::Projects,
                HeaderKey::ViewProjects,
                HeaderKey::Contact,
            ]
            .map(K::Header),
        );
        keys.extend(
            [
                FooterKey::Description,
                FooterKey::Navigation,
                FooterKey::Connect,
                FooterKey::Rights,
            ]
            .map(K::Footer),
        );
        keys
    }
}

impl From<HeroKey> for MessageKey {
    fn from(k: HeroKey) -> Self {
        MessageKey::Hero(k)
    }
}

impl From<SkillsKey> for MessageKey {
    fn from(k: SkillsKey) -> Self {
        MessageKey::Skills(k)
    }
}

impl From<ProjectsKey> for MessageKey {
    fn from(k: ProjectsKey) -> Self {
        MessageKey::Projects(k)
    }
}

impl From<ContactKey> for MessageKey {
    fn from(k: ContactKey) -> Self {
        MessageKey::Contact(k)
    }
}

impl From<HeaderKey> for MessageKey {
    fn from(k: HeaderKey) -> Self {
        MessageKey::Header(k)
    }
}

impl From<FooterKey> for MessageKey {
    fn from(k: FooterKey) -> Self {
        MessageKey::Footer(k)
    }
}

/// One locale's catalog, flattened to `dotted.path -> text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    locale: Locale,
    entries: BTreeMap<String, String>,
}

impl Messages {
    pub fn from_json(locale: Locale, raw: &str) -> Result<Self, MessageError> {
        let tree: Value =
            serde_json::from_str(raw).map_err(|e| MessageError::Parse(e.to_string()))?;
        let mut entries = BTreeMap::new();
        flatten("", &tree, &mut entries)?;
        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: MessageKey) -> Result<&str, MessageError> {
        let path = key.path();
        self.entries
            .get(&path)
            .map(String::as_str)
            .ok_or_else(|| MessageError::MissingKey {
                locale: self.locale.code().to_string(),
                key: path,
            })
    }

    /// Text for `key`, or the key path itself when the catalog lacks it.
    pub fn text(&self, key: impl Into<MessageKey>) -> String {
        let key = key.into();
        match self.get(key) {
            Ok(s) => s.to_string(),
            Err(e) => {
                log::warn!("{e}");
                key.path()
            }
        }
    }

    /// Keys of [`MessageKey::all`] this catalog cannot resolve.
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::all()
            .into_iter()
            .filter(|k| self.get(*k).is_err())
            .collect()
    }
}

fn flatten(
    prefix: &str,
    value: &Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), MessageError> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&path, v, out)?;
            }
            Ok(())
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
            Ok(())
        }
        _ => Err(MessageError::Parse(format!(
            "{prefix}: expected a string or an object"
        ))),
    }
}

/// Loads the embedded catalog for `locale`, caching it for the process.
pub fn load_messages(locale: Locale) -> Result<Arc<Messages>, MessageError> {
    let cache = &*GLOBAL_CATALOG_CACHE;
    if let Some(m) = cache.get(&locale) {
        return Ok(m.clone());
    }
    let file = format!("{}.json", locale.code());
    let content =
        Catalogs::get(&file).ok_or_else(|| MessageError::CatalogMissing(locale.to_string()))?;
    let raw = std::str::from_utf8(&content.data).map_err(|e| MessageError::Parse(e.to_string()))?;
    let messages = Arc::new(Messages::from_json(locale, raw)?);
    cache.insert(locale, messages.clone());
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_every_locale() {
        for locale in Locale::all() {
            let messages = load_messages(locale).unwrap();
            assert_eq!(messages.locale(), locale);
            assert_eq!(messages.missing_keys(), Vec::<MessageKey>::new(), "{locale}");
        }
    }

    #[test]
    fn test_catalogs_have_no_unknown_keys() {
        let known: Vec<String> = MessageKey::all().iter().map(MessageKey::path).collect();
        for locale in Locale::all() {
            let messages = load_messages(locale).unwrap();
            assert_eq!(messages.len(), known.len(), "{locale}");
        }
    }

    #[test]
    fn test_key_paths() {
        assert_eq!(MessageKey::Hero(HeroKey::ContactButton).path(), "Hero.contactButton");
        assert_eq!(
            MessageKey::Projects(ProjectsKey::ProjectDesc(ProjectId::EmptyScan)).path(),
            "Projects.project2Desc"
        );
        assert_eq!(MessageKey::Projects(ProjectsKey::Demo).path(), "Projects.demo");
        assert_eq!(
            MessageKey::Contact(ContactKey::Method(ContactId::Discord, MethodField::Action)).path(),
            "Contact.discord.action"
        );
        assert_eq!(
            MessageKey::Skills(SkillsKey::Category(SkillCategory::Frameworks)).path(),
            "Skills.frameworks"
        );
    }

    #[test]
    fn test_key_paths_are_unique() {
        let mut paths: Vec<String> = MessageKey::all().iter().map(MessageKey::path).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn test_missing_key_is_explicit() {
        let messages = Messages::from_json(Locale::En, r#"{"Hero": {"badge": "hi"}}"#).unwrap();
        assert_eq!(messages.get(HeroKey::Badge.into()), Ok("hi"));
        assert_eq!(
            messages.get(HeroKey::Title.into()),
            Err(MessageError::MissingKey {
                locale: "en".to_string(),
                key: "Hero.title".to_string(),
            })
        );
        assert_eq!(messages.text(HeroKey::Title), "Hero.title");
        assert_eq!(messages.missing_keys().len(), MessageKey::all().len() - 1);
    }

    #[test]
    fn test_rejects_non_string_leaves() {
        let res = Messages::from_json(Locale::En, r#"{"Hero": {"badge": 3}}"#);
        assert!(matches!(res, Err(MessageError::Parse(_))));
        let res = Messages::from_json(Locale::En, "not json");
        assert!(matches!(res, Err(MessageError::Parse(_))));
    }

    #[test]
    fn test_flatten_nested() {
        let messages = Messages::from_json(
            Locale::PtBr,
            r#"{"Contact": {"email": {"title": "E-mail"}}}"#,
        )
        .unwrap();
        assert_eq!(
            messages.get(MessageKey::Contact(ContactKey::Method(
                ContactId::Email,
                MethodField::Title
            ))),
            Ok("E-mail")
        );
    }
}
