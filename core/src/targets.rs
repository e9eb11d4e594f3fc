//! Fixed element identifiers shared by the page shell, the renderers and the
//! runtime controllers.

pub const PROFILE_NAME: &str = "profileName";
pub const PROFILE_HEADLINE: &str = "profileHeadline";
pub const PROFILE_IMAGE: &str = "profileImage";
pub const STATUS_BADGES: &str = "statusBadges";
pub const SOCIAL_LINKS: &str = "socialLinks";
pub const OVERVIEW_CONTENT: &str = "overviewContent";
pub const PROJECTS_GRID: &str = "projectsGrid";
pub const EXPERIENCE_TIMELINE: &str = "experienceTimeline";
pub const LEADERSHIP_TIMELINE: &str = "leadershipTimeline";
pub const SKILLS_GRID: &str = "skillsGrid";
pub const CONTACT_LIST: &str = "contactList";
pub const SYSTEM_LOG: &str = "systemLog";
pub const SIDEBAR: &str = "sidebar";
pub const MENU_TOGGLE: &str = "menuToggle";

/// Class carried by every navigable section.
pub const PANEL_CLASS: &str = "panel";
/// Class carried by every sidebar navigation link.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Panels in document order: (section id, nav label).
pub const PANELS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("leadership", "Leadership"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];
