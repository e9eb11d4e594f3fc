//! # Content Store
//!
//! The single read-only record every renderer draws from. It is built once
//! (either [`ContentStore::builtin`] or loaded from a `content.json`) and
//! never mutated afterwards. All list ordering is display order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content has {count} error(s), first: {first}")]
    Invalid { count: usize, first: ContentIssue },
}

// ============================================================================
// Content types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStore {
    pub profile: Profile,
    pub overview: Overview,
    pub projects: Vec<Project>,
    pub experience: Vec<TimelineEntry>,
    pub leadership: Vec<TimelineEntry>,
    pub skills: Skills,
    pub system_log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub image: String,
    pub status_badges: Vec<String>,
    pub links: Links,
}

impl Profile {
    /// The address behind the `email` link, without `mailto:`.
    pub fn email_address(&self) -> Option<&str> {
        self.links
            .get("email")
            .map(|link| link.strip_prefix("mailto:").unwrap_or(link))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub mission: String,
    pub status: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub tech_stack: Vec<String>,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Shared shape of experience and leadership entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub role: String,
    pub organization: String,
    pub date: String,
    pub description: Vec<String>,
}

/// platform name -> URL, in display order. Repeated keys in a source
/// document collapse to the last value.
pub type Links = IndexMap<String, String>;

/// category -> skills, in display order.
pub type Skills = IndexMap<String, Vec<String>>;

impl ContentStore {
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), projects = store.projects.len(), "Loaded content");
        Ok(store)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ContentError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentIssue {
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level} at {}: {}", self.location, self.message)
    }
}

const LINK_PREFIXES: &[&str] = &["https://", "http://", "mailto:", "#"];

impl ContentStore {
    /// Structural checks the type system cannot express.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();
        let mut error = |location: String, message: String| {
            issues.push(ContentIssue {
                severity: Severity::Error,
                location,
                message,
            })
        };

        if self.profile.name.trim().is_empty() {
            error("profile.name".into(), "must not be blank".into());
        }
        if self.profile.headline.trim().is_empty() {
            error("profile.headline".into(), "must not be blank".into());
        }
        for (platform, url) in &self.profile.links {
            if !is_link(url) {
                error(
                    format!("profile.links.{platform}"),
                    format!("unsupported link `{url}`"),
                );
            }
        }

        for (index, project) in self.projects.iter().enumerate() {
            let location = format!("projects[{index}]");
            if project.id.trim().is_empty() {
                error(format!("{location}.id"), "must not be blank".into());
            }
            if self.projects[..index].iter().any(|p| p.id == project.id) {
                error(
                    format!("{location}.id"),
                    format!("duplicate project id `{}`", project.id),
                );
            }
            if project.title.trim().is_empty() {
                error(format!("{location}.title"), "must not be blank".into());
            }
            let links = [("demo", &project.links.demo), ("code", &project.links.code)];
            for (kind, link) in links {
                if let Some(url) = link {
                    if !is_link(url) {
                        error(
                            format!("{location}.links.{kind}"),
                            format!("unsupported link `{url}`"),
                        );
                    }
                }
            }
        }

        let timelines = [
            ("experience", &self.experience),
            ("leadership", &self.leadership),
        ];
        for (name, entries) in timelines {
            for (index, entry) in entries.iter().enumerate() {
                if entry.role.trim().is_empty() {
                    error(format!("{name}[{index}].role"), "must not be blank".into());
                }
            }
        }

        if self.system_log.is_empty() {
            issues.push(ContentIssue {
                severity: Severity::Warning,
                location: "systemLog".into(),
                message: "empty script, the log animation will stay idle".into(),
            });
        }

        issues
    }

    /// Fails on the first error-level issue; warnings are logged.
    pub fn ensure_valid(&self) -> Result<(), ContentError> {
        let issues = self.validate();
        for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
            tracing::warn!(%issue, "Content warning");
        }

        let mut errors = issues
            .into_iter()
            .filter(|i| i.severity == Severity::Error);
        match errors.next() {
            Some(first) => Err(ContentError::Invalid {
                count: 1 + errors.count(),
                first,
            }),
            None => Ok(()),
        }
    }
}

fn is_link(url: &str) -> bool {
    LINK_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

// ============================================================================
// Built-in content
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn keyed<V>(entries: impl IntoIterator<Item = (&'static str, V)>) -> IndexMap<String, V> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn entry(role: &str, organization: &str, date: &str, description: &[&str]) -> TimelineEntry {
    TimelineEntry {
        role: role.into(),
        organization: organization.into(),
        date: date.into(),
        description: strings(description),
    }
}

impl ContentStore {
    /// The portfolio content compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Rim Ba".into(),
                headline: "Software Engineering Student | Building Human-Centered AI Solutions"
                    .into(),
                image: "Rim/assets/me.jpeg".into(),
                status_badges: strings(&[
                    "🎯 SEEKING: Summer 2026 SWE Internship",
                    "📍 LOCATION: MA / Remote",
                    "💡 FOCUS: Human-centered software & AI",
                ]),
                links: keyed([
                    ("github", "https://github.com/rimba".to_string()),
                    ("linkedin", "https://linkedin.com/in/rimba".to_string()),
                    ("email", "mailto:contact@rimba.dev".to_string()),
                ]),
            },
            overview: Overview {
                mission: "Passionate software engineer focused on building AI-powered solutions \
                          that prioritize human values, privacy, and accessibility. Currently \
                          seeking Summer 2026 SWE internship opportunities to apply my skills in \
                          real-world impact."
                    .into(),
                status: "Computer Science Student".into(),
                interests: strings(&[
                    "Software Engineering",
                    "Artificial Intelligence",
                    "Tech Policy",
                    "Human-Centered Design",
                ]),
            },
            projects: vec![
                Project {
                    id: "styles-by-sheyu".into(),
                    title: "Styles By Sheyu".into(),
                    tagline: "Modern hair salon website with online booking".into(),
                    tech_stack: strings(&["HTML", "CSS", "JavaScript", "PHP", "MySQL"]),
                    description: "Built a full-featured website for a local hair salon enabling \
                                  online appointment booking, service browsing, and customer \
                                  management."
                        .into(),
                    highlights: strings(&[
                        "Developed responsive front-end with modern UI/UX design",
                        "Implemented backend booking system with PHP and MySQL",
                        "Integrated payment processing for online deposits",
                        "Increased booking efficiency by 40%",
                    ]),
                    links: ProjectLinks {
                        demo: Some("https://stylesbysheyu.com".into()),
                        code: Some("https://github.com/rimba/styles-by-sheyu".into()),
                    },
                    image: None,
                },
                Project {
                    id: "displaced-documents".into(),
                    title: "Displaced Documents App".into(),
                    tagline: "Digital archive platform for refugee documentation".into(),
                    tech_stack: strings(&["React", "Node.js", "MongoDB", "AWS S3"]),
                    description: "Developed at Fletcher IDEA Lab to help displaced persons \
                                  securely store and access important documents digitally."
                        .into(),
                    highlights: strings(&[
                        "Designed secure document storage with encryption",
                        "Built user-friendly interface for non-technical users",
                        "Implemented multi-language support (English, Spanish, Arabic)",
                        "Collaborated with policy researchers on privacy features",
                    ]),
                    links: ProjectLinks {
                        demo: None,
                        code: Some("https://github.com/fletcher-idea-lab/displaced-docs".into()),
                    },
                    image: None,
                },
            ],
            experience: vec![
                entry(
                    "Software Development Intern",
                    "Fletcher IDEA Lab",
                    "Sep 2025 - Present",
                    &[
                        "Developing web applications addressing global policy challenges",
                        "Collaborating with graduate researchers on tech-policy initiatives",
                    ],
                ),
                entry(
                    "Freelance Web Developer",
                    "Self-Employed",
                    "Jan 2024 - Present",
                    &[
                        "Built custom websites for local businesses and organizations",
                        "Managed full development lifecycle from design to deployment",
                    ],
                ),
                entry(
                    "Computer Science Tutor",
                    "Tufts University",
                    "Sep 2024 - May 2025",
                    &[
                        "Mentored students in intro programming courses (C++, Python)",
                        "Held weekly office hours and code review sessions",
                    ],
                ),
            ],
            leadership: vec![
                entry(
                    "Board Member",
                    "AI Safety Students Association",
                    "2024 - Present",
                    &[
                        "Organizing workshops on AI ethics and safety",
                        "Leading discussions on responsible AI development",
                        "Building community around AI governance",
                    ],
                ),
                entry(
                    "Youth Program Coordinator",
                    "Community Outreach Initiative",
                    "2023 - 2024",
                    &[
                        "Coordinated STEM education programs for underserved youth",
                        "Mentored 20+ students in coding and technology",
                        "Organized community tech literacy workshops",
                    ],
                ),
                entry(
                    "Interfaith Ambassador",
                    "Tufts Interfaith Center",
                    "2023 - Present",
                    &[
                        "Facilitating dialogue on intersection of technology and ethics",
                        "Promoting inclusive community building",
                    ],
                ),
            ],
            skills: keyed([
                (
                    "programming",
                    strings(&[
                        "HTML", "CSS", "JavaScript", "PHP", "SQL", "Node.js", "C++", "Python",
                        "React",
                    ]),
                ),
                (
                    "concepts",
                    strings(&[
                        "Web Development",
                        "Database Design",
                        "RESTful APIs",
                        "Responsive Design",
                        "Version Control (Git)",
                    ]),
                ),
                (
                    "languages",
                    strings(&[
                        "English (Native)",
                        "Spanish (Fluent)",
                        "Arabic (Conversational)",
                    ]),
                ),
                (
                    "tools",
                    strings(&["VS Code", "GitHub", "Figma", "MongoDB", "MySQL", "AWS"]),
                ),
            ]),
            system_log: strings(&[
                "Initializing portfolio interface...",
                "Loading neural network modules...",
                "✓ Design system loaded successfully",
                "✓ Navigation mesh established",
                "Scanning project database...",
                "✓ Found 2 active projects",
                "Loading experience timeline...",
                "✓ Experience data synchronized",
                "Analyzing skill matrix...",
                "✓ Technical proficiencies mapped",
                "Security protocols: Human-centered design enabled",
                "Privacy framework: Zero-knowledge principles active",
                "AI ethics module: Operational",
                "✓ All systems nominal",
                "Status: Ready for internship opportunities",
                "Recommendation: Explore projects section →",
                "Tip: Check out leadership initiatives",
                "Contact systems: Online and responsive",
                "GitHub repositories: Public and documented",
                "Resume: Available for download",
                "System uptime: 100% commitment to excellence",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let store = ContentStore::builtin();
        assert!(store.validate().is_empty());
        assert_eq!(store.profile.email_address(), Some("contact@rimba.dev"));
    }

    #[test]
    fn test_json_preserves_map_order() {
        let raw = r#"{
            "profile": {
                "name": "A", "headline": "B", "image": "me.png",
                "statusBadges": [],
                "links": { "linkedin": "https://l", "github": "https://g" }
            },
            "overview": { "mission": "m", "status": "s", "interests": [] },
            "projects": [{
                "id": "p", "title": "P", "tagline": "t", "techStack": [],
                "description": "d", "highlights": [], "image": null
            }],
            "experience": [],
            "leadership": [],
            "skills": { "tools": ["x"], "concepts": ["y"] },
            "systemLog": ["boot"]
        }"#;

        let store = ContentStore::from_json_str(raw).unwrap();
        let platforms: Vec<_> = store.profile.links.keys().map(String::as_str).collect();
        assert_eq!(platforms, vec!["linkedin", "github"]);
        let categories: Vec<_> = store.skills.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["tools", "concepts"]);
        assert_eq!(store.projects[0].links, ProjectLinks::default());
    }

    #[test]
    fn test_repeated_link_key_keeps_last_value() {
        let mut store = ContentStore::builtin();
        store.profile.links = keyed([("github", "https://old".to_string())]);
        let json = store.to_json(false).unwrap().replace(
            r#""github":"https://old""#,
            r#""github":"https://old","email":"mailto:a@b.c","github":"https://new""#,
        );

        let reloaded = ContentStore::from_json_str(&json).unwrap();
        let links: Vec<_> = reloaded
            .profile
            .links
            .iter()
            .map(|(platform, url)| (platform.as_str(), url.as_str()))
            .collect();
        assert_eq!(
            links,
            vec![("github", "https://new"), ("email", "mailto:a@b.c")]
        );
        assert!(reloaded.validate().is_empty());
    }

    #[test]
    fn test_missing_required_field_fails_to_load() {
        let err = ContentStore::from_json_str(r#"{ "profile": {} }"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_validation_reports_duplicates_and_bad_links() {
        let mut store = ContentStore::builtin();
        let mut twin = store.projects[0].clone();
        twin.links.demo = Some("ftp://nope".into());
        store.projects.push(twin);
        store.system_log.clear();

        let issues = store.validate();
        assert!(issues.iter().any(|i| i.message.contains("duplicate project id")));
        assert!(issues.iter().any(|i| i.message.contains("ftp://nope")));
        assert!(issues.iter().any(|i| i.severity == Severity::Warning));

        let err = store.ensure_valid().unwrap_err();
        assert!(matches!(err, ContentError::Invalid { count: 2, .. }));
    }
}
