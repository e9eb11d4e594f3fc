//! Contact list and the clipboard confirmation toast.

use super::external_link;
use crate::content::Profile;
use crate::fragment::{ElementNode, Fragment, el};

pub const COPY_ACTION_ATTR: &str = "data-action";
pub const COPY_VALUE_ATTR: &str = "data-value";
pub const TOAST_CLASS: &str = "copy-toast";
pub const TOAST_MESSAGE: &str = "✓ Email copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Clicking the item copies its value.
    Copy,
    /// The item carries an arrow link to `link`.
    Link,
    Download,
}

impl ContactAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactAction::Copy => "copy",
            ContactAction::Link => "link",
            ContactAction::Download => "download",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub link: String,
    pub action: ContactAction,
}

/// Contact entries derived from the profile links. Entries whose link is
/// missing from the profile are left out.
pub fn contact_items(profile: &Profile) -> Vec<ContactItem> {
    let mut items = Vec::new();

    let email = profile.links.get("email").zip(profile.email_address());
    if let Some((link, address)) = email {
        items.push(ContactItem {
            icon: "✉️",
            label: "Email",
            value: address.to_string(),
            link: link.clone(),
            action: ContactAction::Copy,
        });
    }
    if let Some(linkedin) = profile.links.get("linkedin") {
        items.push(ContactItem {
            icon: "💼",
            label: "LinkedIn",
            value: "Connect on LinkedIn".into(),
            link: linkedin.clone(),
            action: ContactAction::Link,
        });
    }
    if let Some(github) = profile.links.get("github") {
        items.push(ContactItem {
            icon: "💻",
            label: "GitHub",
            value: "View Repositories".into(),
            link: github.clone(),
            action: ContactAction::Link,
        });
    }
    items.push(ContactItem {
        icon: "📄",
        label: "Resume",
        value: "Download PDF".into(),
        link: "#".into(),
        action: ContactAction::Download,
    });

    items
}

pub fn render_item(item: &ContactItem) -> ElementNode {
    let mut node = el("div")
        .class("contact-item")
        .attr(COPY_ACTION_ATTR, item.action.as_str());

    if item.action == ContactAction::Copy {
        node = node
            .attr(COPY_VALUE_ATTR, item.value.as_str())
            .style("cursor", "pointer");
    }

    node = node
        .child(el("div").class("contact-icon").text(item.icon))
        .child(
            el("div")
                .class("contact-details")
                .child(el("div").class("contact-label").text(item.label))
                .child(el("div").class("contact-value").text(item.value.as_str())),
        );

    if item.action == ContactAction::Link {
        node = node.child(
            external_link(&item.link)
                .style("margin-left", "auto")
                .style("color", "var(--color-accent-cyan)")
                .text("→"),
        );
    }

    node
}

pub fn render(profile: &Profile) -> Fragment {
    contact_items(profile).iter().map(render_item).collect()
}

/// Transient confirmation shown after a successful copy.
pub fn copy_toast(animated: bool) -> ElementNode {
    let toast = el("div")
        .class(TOAST_CLASS)
        .attr("role", "status")
        .style("position", "fixed")
        .style("top", "50%")
        .style("left", "50%")
        .style("transform", "translate(-50%, -50%)")
        .style("background", "var(--color-accent-cyan)")
        .style("color", "var(--color-bg-primary)")
        .style("padding", "1rem 2rem")
        .style("border-radius", "0.5rem")
        .style("font-weight", "600")
        .style("z-index", "1000");

    let toast = if animated {
        toast.style("animation", "fadeInOut 2s ease-in-out")
    } else {
        toast.style("animation", "none")
    };
    toast.text(TOAST_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_builtin_contact_items() {
        let items = contact_items(&ContentStore::builtin().profile);
        let labels: Vec<_> = items.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Email", "LinkedIn", "GitHub", "Resume"]);
        assert_eq!(items[0].value, "contact@rimba.dev");
        assert_eq!(items[0].action, ContactAction::Copy);
    }

    #[test]
    fn test_only_link_items_get_arrows() {
        let frag = render(&ContentStore::builtin().profile);
        let items: Vec<_> = frag.elements().collect();

        let arrows: Vec<_> = items
            .iter()
            .map(|item| item.descendants().iter().filter(|d| d.tag == "a").count())
            .collect();
        assert_eq!(arrows, vec![0, 1, 1, 0]);
        assert_eq!(items[0].get_attr(COPY_VALUE_ATTR), Some("contact@rimba.dev"));
        assert_eq!(items[1].get_attr(COPY_VALUE_ATTR), None);
    }

    #[test]
    fn test_missing_email_drops_copy_item() {
        let mut profile = ContentStore::builtin().profile;
        profile.links = [("github".to_string(), "https://github.com/x".to_string())]
            .into_iter()
            .collect();

        let labels: Vec<_> = contact_items(&profile).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["GitHub", "Resume"]);
    }

    #[test]
    fn test_toast_respects_motion_preference() {
        assert!(copy_toast(true).style_text().contains("fadeInOut 2s"));
        assert!(copy_toast(false).style_text().contains("animation: none;"));
        assert_eq!(copy_toast(true).text_content(), TOAST_MESSAGE);
    }
}
