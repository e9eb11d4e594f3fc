//! HTML shell and default stylesheet for the generated page.

/// Default stylesheet.
pub const DEFAULT_CSS: &str = r#"
:root {
  --color-bg-primary: #0a0e14;
  --color-bg-secondary: #111722;
  --color-bg-tertiary: #1a2230;
  --color-text-primary: #e6edf3;
  --color-text-secondary: #9aa7b4;
  --color-text-dim: #6b7785;
  --color-border: #243042;
  --color-accent-cyan: #22d3ee;
  --color-accent-purple: #a78bfa;
  --sidebar-width: 300px;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
  background-color: var(--color-bg-primary);
  color: var(--color-text-primary);
  line-height: 1.6;
}

a { color: var(--color-accent-cyan); text-decoration: none; }

.menu-toggle {
  display: none;
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 200;
  background: var(--color-bg-secondary);
  color: var(--color-text-primary);
  border: 1px solid var(--color-border);
  border-radius: 0.5rem;
  padding: 0.5rem 0.75rem;
  font-size: 1.25rem;
}

.sidebar {
  position: fixed;
  top: 0;
  left: 0;
  bottom: 0;
  width: var(--sidebar-width);
  padding: 2rem 1.5rem;
  background: var(--color-bg-secondary);
  border-right: 1px solid var(--color-border);
  overflow-y: auto;
  transition: transform 0.3s ease;
}

.profile { text-align: center; margin-bottom: 2rem; }
.profile-image { width: 120px; height: 120px; border-radius: 50%; object-fit: cover; margin-bottom: 1rem; }
.profile-name { font-size: 1.5rem; }
.profile-headline { color: var(--color-text-secondary); font-size: 0.9rem; margin-bottom: 1rem; }

.status-badges { display: flex; flex-direction: column; gap: 0.4rem; margin-bottom: 1rem; }
.status-badge {
  font-size: 0.8rem;
  padding: 0.3rem 0.75rem;
  border-radius: 9999px;
  background: var(--color-bg-tertiary);
  color: var(--color-accent-cyan);
}

.social-links { display: flex; justify-content: center; gap: 1rem; font-size: 1.25rem; }

.nav { display: flex; flex-direction: column; gap: 0.25rem; }
.nav-link {
  color: var(--color-text-secondary);
  padding: 0.5rem 0.75rem;
  border-radius: 0.4rem;
}
.nav-link:hover, .nav-link.active { color: var(--color-accent-cyan); background: var(--color-bg-tertiary); }

.main-content { margin-left: var(--sidebar-width); padding: 3rem; max-width: 1100px; }

.panel {
  margin-bottom: 4rem;
  opacity: 0;
  transform: translateY(20px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}
.panel.visible { opacity: 1; transform: none; }
.panel-title { font-size: 1.75rem; margin-bottom: 1.5rem; }
.panel-subtitle { font-weight: 600; color: var(--color-text-secondary); margin-bottom: 0.5rem; }

.overview-content p { margin-bottom: 1rem; }

.system-log-panel { margin-top: 2rem; }
.system-log {
  height: 200px;
  overflow-y: auto;
  font-family: 'SFMono-Regular', Consolas, 'Liberation Mono', monospace;
  font-size: 0.8rem;
  background: var(--color-bg-secondary);
  border: 1px solid var(--color-border);
  border-radius: 0.5rem;
  padding: 0.75rem;
}
.log-line { height: 20px; white-space: nowrap; }
.log-timestamp { color: var(--color-text-dim); margin-right: 0.5rem; }

.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.5rem; }
.project-card {
  background: var(--color-bg-secondary);
  border: 1px solid var(--color-border);
  border-radius: 0.75rem;
  padding: 1.5rem;
  animation: fadeIn 0.5s ease both;
}
.project-image { width: 100%; border-radius: 0.5rem; margin-bottom: 1rem; }
.project-tagline { color: var(--color-text-secondary); margin-bottom: 0.75rem; }
.tech-stack { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-bottom: 0.75rem; }
.tech-chip, .skill-tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 9999px;
  background: var(--color-bg-tertiary);
  color: var(--color-accent-purple);
}
.project-description ul { padding-left: 1.25rem; margin-top: 0.5rem; }
.project-actions { display: flex; gap: 0.75rem; margin-top: 1rem; }
.btn { padding: 0.5rem 1rem; border-radius: 0.4rem; font-weight: 600; font-size: 0.85rem; }
.btn-primary { background: var(--color-accent-cyan); color: var(--color-bg-primary); }
.btn-secondary { border: 1px solid var(--color-accent-cyan); }

.timeline { border-left: 2px solid var(--color-border); padding-left: 1.5rem; }
.timeline-item { margin-bottom: 2rem; animation: fadeIn 0.5s ease both; }
.experience-org { color: var(--color-accent-cyan); }
.experience-date { color: var(--color-text-dim); font-size: 0.85rem; }
.experience-description { padding-left: 1.25rem; margin-top: 0.5rem; }

.skills-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.skill-category-title { font-weight: 600; margin-bottom: 0.5rem; }
.skill-tags { display: flex; flex-wrap: wrap; gap: 0.4rem; }

.contact-list { display: flex; flex-direction: column; gap: 0.75rem; max-width: 520px; }
.contact-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  background: var(--color-bg-secondary);
  border: 1px solid var(--color-border);
  border-radius: 0.5rem;
}
.contact-icon { font-size: 1.5rem; }
.contact-label { font-size: 0.8rem; color: var(--color-text-dim); }

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: none; }
}

@media (max-width: 768px) {
  .menu-toggle { display: block; }
  .sidebar { transform: translateX(-100%); z-index: 150; }
  .sidebar.open { transform: none; }
  .main-content { margin-left: 0; padding: 4.5rem 1.25rem 2rem; }
}

@media (prefers-reduced-motion: reduce) {
  * { animation: none !important; transition: none !important; }
}
"#;

/// Wraps pre-rendered head and body markup in a complete document.
pub fn generate_html(title: &str, description: &str, head_html: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{description}">
  <title>{title}</title>
  <style>{css}</style>
  {head_html}
</head>
<body>
{body_html}
</body>
</html>"#,
        title = title,
        description = description,
        css = DEFAULT_CSS,
        head_html = head_html,
        body_html = body_html,
    )
}
