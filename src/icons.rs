/// Line icons drawn on a 24x24 grid with a 2px round stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Briefcase,
    ChevronDown,
    Code,
    ExternalLink,
    Github,
    Home,
    Languages,
    Mail,
    MessageSquare,
    Moon,
    Sun,
    User,
}

impl Icon {
    /// SVG path data, one entry per `<path>` element.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Icon::Languages => &[
                "m5 8 6 6",
                "m4 14 6-6 2-3",
                "M2 5h12",
                "M7 2h1",
                "m22 22-5-10-5 10",
                "M14 18h6",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::Sun => &[
                "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            ],
        }
    }
}

/// Icon attached to a piece of static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    /// A line icon rendered as inline SVG.
    Line(Icon),
    /// A brand logo from the devicon font, by CSS class.
    Devicon(&'static str),
}
