//! Static content shown by the site and the view models built from it.
//!
//! Everything here is fixed at build time. Lists are rendered in declaration
//! order; nothing is sorted or deduplicated.

use crate::icons::{Icon, IconRef};
use crate::messages::{
    ContactKey, FooterKey, HeaderKey, MessageKey, Messages, MethodField, ProjectsKey,
};

pub const AUTHOR: &str = "hhartur";

/// Descriptions longer than this many characters get a "see more" toggle.
pub const SEE_MORE_THRESHOLD: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactId {
    Email,
    Discord,
}

impl ContactId {
    /// Namespace of this method's strings under `Contact`.
    pub const fn catalog_key(self) -> &'static str {
        match self {
            ContactId::Email => "email",
            ContactId::Discord => "discord",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub id: ContactId,
    pub icon: IconRef,
    pub value: &'static str,
    pub href: &'static str,
    pub accent: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        id: ContactId::Email,
        icon: IconRef::Line(Icon::Mail),
        value: "artur.carmello0@gmail.com",
        href: "mailto:artur.carmello0@gmail.com",
        accent: "text-blue-500",
    },
    ContactMethod {
        id: ContactId::Discord,
        icon: IconRef::Line(Icon::MessageSquare),
        value: "dsc.gg/hhartur",
        href: "https://dsc.gg/hhartur",
        accent: "text-indigo-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectId {
    EmptyScan,
    Palato,
}

impl ProjectId {
    /// Prefix of the `<prefix>Title` / `<prefix>Desc` catalog keys.
    pub const fn catalog_prefix(self) -> &'static str {
        match self {
            ProjectId::EmptyScan => "project2",
            ProjectId::Palato => "project1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub source: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: ProjectId::EmptyScan,
        image: "https://ik.imagekit.io/hhartur/emptyscan",
        tags: &["Next.js", "TypeScript", "Tailwind", "JavaScript", "Fastify"],
        source: None,
        demo: Some("https://emptyscan.site"),
    },
    Project {
        id: ProjectId::Palato,
        image: "https://ik.imagekit.io/hhartur/palato",
        tags: &["Next.js", "TypeScript", "Tailwind"],
        source: None,
        demo: Some("https://palato-loja.vercel.app"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillCategory {
    #[default]
    Languages,
    Frameworks,
    Libraries,
}

impl SkillCategory {
    pub const fn all() -> [SkillCategory; 3] {
        [
            SkillCategory::Languages,
            SkillCategory::Frameworks,
            SkillCategory::Libraries,
        ]
    }

    pub const fn catalog_key(self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Libraries => "libraries",
        }
    }

    pub const fn skills(self) -> &'static [Skill] {
        match self {
            SkillCategory::Languages => LANGUAGES,
            SkillCategory::Frameworks => FRAMEWORKS,
            SkillCategory::Libraries => LIBRARIES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: IconRef,
    pub accent: &'static str,
}

const fn skill(name: &'static str, devicon: &'static str, accent: &'static str) -> Skill {
    Skill {
        name,
        icon: IconRef::Devicon(devicon),
        accent,
    }
}

const LANGUAGES: &[Skill] = &[
    skill("TypeScript", "devicon-typescript-plain", "#3178C6"),
    skill("Dart", "devicon-dart-plain", "#0175C2"),
    skill("PHP", "devicon-php-plain", "#777BB4"),
    skill("C++", "devicon-cplusplus-plain", "#00599C"),
];

const FRAMEWORKS: &[Skill] = &[
    skill("Next.js", "devicon-nextjs-plain", "#000000"),
    skill("Nuxt.js", "devicon-nuxtjs-plain", "#00DC82"),
    skill("React", "devicon-react-original", "#61DAFB"),
    skill("Angular", "devicon-angularjs-plain", "#DD0031"),
    skill("Vue", "devicon-vuejs-plain", "#4FC08D"),
    skill("NestJS", "devicon-nestjs-plain", "#E0234E"),
    skill("Fastify", "devicon-fastify-plain", "#000000"),
    skill("Express", "devicon-express-original", "#000000"),
];

const LIBRARIES: &[Skill] = &[
    skill("Vite", "devicon-vitejs-plain", "#646CFF"),
    skill("Tailwind", "devicon-tailwindcss-plain", "#06B6D4"),
    skill("Framer", "devicon-framermotion-original", "#0055FF"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: IconRef,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: IconRef::Devicon("devicon-github-original"),
        href: "https://github.com/hhartur",
    },
    SocialLink {
        label: "LinkedIn",
        icon: IconRef::Devicon("devicon-linkedin-plain"),
        href: "https://linkedin.com/in/artur-carmello-2b67353a2",
    },
    SocialLink {
        label: "Twitter",
        icon: IconRef::Devicon("devicon-twitter-original"),
        href: "https://x.com/hhartur_",
    },
    SocialLink {
        label: "Email",
        icon: IconRef::Line(Icon::Mail),
        href: "mailto:artur.carmello0@gmail.com",
    },
];

/// An in-app link; `path` is locale-less and gets prefixed when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: HeaderKey,
}

pub const FOOTER_NAV: &[NavLink] = &[
    NavLink {
        path: "/",
        label: HeaderKey::Home,
    },
    NavLink {
        path: "/#skills",
        label: HeaderKey::Skills,
    },
    NavLink {
        path: "/#projects",
        label: HeaderKey::Projects,
    },
    NavLink {
        path: "/contact",
        label: HeaderKey::Contact,
    },
];

pub const ABOUT_MENU: &[NavLink] = &[
    NavLink {
        path: "/#skills",
        label: HeaderKey::Skills,
    },
    NavLink {
        path: "/#learning",
        label: HeaderKey::Learning,
    },
];

pub const PROJECTS_MENU: &[NavLink] = &[NavLink {
    path: "/#projects",
    label: HeaderKey::ViewProjects,
}];

/// Decorative circle floating behind the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropCircle {
    pub size: u32,
    pub x: &'static str,
    pub y: &'static str,
    pub delay: f32,
    pub filled: bool,
}

pub const BACKDROP_CIRCLES: &[BackdropCircle] = &[
    BackdropCircle { size: 120, x: "5%", y: "10%", delay: 0.0, filled: true },
    BackdropCircle { size: 80, x: "12%", y: "5%", delay: 0.5, filled: false },
    BackdropCircle { size: 100, x: "8%", y: "18%", delay: 1.0, filled: false },
    BackdropCircle { size: 60, x: "15%", y: "12%", delay: 1.5, filled: true },
];

/// Expanded/collapsed state of one project card description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionToggle {
    collapsible: bool,
    expanded: bool,
}

impl DescriptionToggle {
    pub fn for_description(description: &str) -> Self {
        Self {
            collapsible: description.chars().count() > SEE_MORE_THRESHOLD,
            expanded: false,
        }
    }

    /// Whether the see more/see less control is rendered at all.
    pub fn shows_control(&self) -> bool {
        self.collapsible
    }

    /// Whether the description is line-clamped.
    pub fn is_clamped(&self) -> bool {
        self.collapsible && !self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
            ..self
        }
    }

    pub fn control_label(&self) -> ProjectsKey {
        if self.expanded {
            ProjectsKey::SeeLess
        } else {
            ProjectsKey::SeeMore
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard {
    pub id: ContactId,
    pub icon: IconRef,
    pub accent: &'static str,
    pub title: String,
    pub description: String,
    pub value: &'static str,
    pub href: &'static str,
    pub action: String,
}

pub fn contact_cards(messages: &Messages) -> Vec<ContactCard> {
    CONTACT_METHODS
        .iter()
        .map(|m| {
            let field = |f| messages.text(MessageKey::Contact(ContactKey::Method(m.id, f)));
            ContactCard {
                id: m.id,
                icon: m.icon,
                accent: m.accent,
                title: field(MethodField::Title),
                description: field(MethodField::Description),
                value: m.value,
                href: m.href,
                action: field(MethodField::Action),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub image: &'static str,
    pub title: String,
    pub description: String,
    pub tags: &'static [&'static str],
    pub source: Option<&'static str>,
    pub demo: Option<&'static str>,
}

impl ProjectCard {
    pub fn description_toggle(&self) -> DescriptionToggle {
        DescriptionToggle::for_description(&self.description)
    }
}

pub fn project_cards(messages: &Messages) -> Vec<ProjectCard> {
    PROJECTS
        .iter()
        .map(|p| ProjectCard {
            id: p.id,
            image: p.image,
            title: messages.text(MessageKey::Projects(ProjectsKey::ProjectTitle(p.id))),
            description: messages.text(MessageKey::Projects(ProjectsKey::ProjectDesc(p.id))),
            tags: p.tags,
            source: p.source,
            demo: p.demo,
        })
        .collect()
}

/// `© <year> hhartur. <rights>` for the footer.
pub fn copyright_line(messages: &Messages, year: i32) -> String {
    format!(
        "© {year} {AUTHOR}. {}",
        messages.text(MessageKey::Footer(FooterKey::Rights))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::messages::load_messages;

    #[test]
    fn test_contact_cards_en() {
        let messages = load_messages(Locale::En).unwrap();
        let cards = contact_cards(&messages);
        let ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ContactId::Email, ContactId::Discord]);
        assert_eq!(cards[0].href, "mailto:artur.carmello0@gmail.com");
        assert_eq!(cards[1].href, "https://dsc.gg/hhartur");
        assert_eq!(cards[0].title, "Email");
        assert_eq!(cards[1].action, "Join the server");
    }

    #[test]
    fn test_contact_cards_match_static_list() {
        for locale in Locale::all() {
            let messages = load_messages(locale).unwrap();
            let cards = contact_cards(&messages);
            assert_eq!(cards.len(), CONTACT_METHODS.len());
            for (card, method) in cards.iter().zip(CONTACT_METHODS) {
                assert_eq!(card.id, method.id);
                assert_eq!(card.value, method.value);
                assert!(!card.title.is_empty());
            }
        }
    }

    #[test]
    fn test_project_cards_keep_declaration_order() {
        let messages = load_messages(Locale::PtBr).unwrap();
        let cards = project_cards(&messages);
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["EmptyScan", "Palato"]);
        assert_eq!(
            cards[0].tags,
            &["Next.js", "TypeScript", "Tailwind", "JavaScript", "Fastify"]
        );
        assert!(cards.iter().all(|c| c.source.is_none() && c.demo.is_some()));
    }

    #[test]
    fn test_short_description_has_no_toggle() {
        let exactly = "a".repeat(SEE_MORE_THRESHOLD);
        let toggle = DescriptionToggle::for_description(&exactly);
        assert!(!toggle.shows_control());
        assert!(!toggle.is_clamped());
        assert!(!DescriptionToggle::for_description("").shows_control());
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        // 150 two-byte characters
        let accented = "é".repeat(SEE_MORE_THRESHOLD);
        assert!(!DescriptionToggle::for_description(&accented).shows_control());
    }

    #[test]
    fn test_long_description_double_toggle() {
        let long = "a".repeat(SEE_MORE_THRESHOLD + 1);
        let initial = DescriptionToggle::for_description(&long);
        assert!(initial.shows_control());
        assert!(initial.is_clamped());
        assert_eq!(initial.control_label(), ProjectsKey::SeeMore);

        let open = initial.toggled();
        assert!(open.is_expanded());
        assert!(!open.is_clamped());
        assert_eq!(open.control_label(), ProjectsKey::SeeLess);

        assert_eq!(open.toggled(), initial);
    }

    #[test]
    fn test_skill_categories() {
        let counts: Vec<_> = SkillCategory::all()
            .iter()
            .map(|c| c.skills().len())
            .collect();
        assert_eq!(counts, vec![4, 8, 3]);
        assert_eq!(SkillCategory::default(), SkillCategory::Languages);
        assert_eq!(SkillCategory::Languages.skills()[0].name, "TypeScript");
        assert_eq!(SkillCategory::Libraries.skills()[2].name, "Framer");
    }

    #[test]
    fn test_copyright_line() {
        let messages = load_messages(Locale::En).unwrap();
        assert_eq!(
            copyright_line(&messages, 2025),
            "© 2025 hhartur. All rights reserved."
        );
    }
}
