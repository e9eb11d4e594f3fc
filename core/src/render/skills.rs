//! Skill categories.

use crate::content::Skills;
use crate::fragment::{Fragment, el};

pub fn category_label(category: &str) -> &str {
    match category {
        "programming" => "💻 Programming Languages",
        "concepts" => "🎯 Technical Concepts",
        "tools" => "🛠️ Tools & Technologies",
        "languages" => "🌍 Languages",
        other => other,
    }
}

pub fn render(skills: &Skills) -> Fragment {
    skills
        .iter()
        .map(|(category, list)| {
            el("div")
                .class("skill-category")
                .child(
                    el("div")
                        .class("skill-category-title")
                        .text(category_label(category)),
                )
                .child(
                    el("div").class("skill-tags").children(
                        list.iter()
                            .map(|skill| el("span").class("skill-tag").text(skill.as_str())),
                    ),
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_category_labels() {
        let skills: Skills = [
            ("tools".to_string(), vec!["Git".to_string()]),
            (
                "cooking".to_string(),
                vec!["Bread".to_string(), "Soup".to_string()],
            ),
        ]
        .into_iter()
        .collect();

        let frag = render(&skills);
        let titles: Vec<_> = frag
            .find_class("skill-category-title")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(titles, vec!["🛠️ Tools & Technologies", "cooking"]);

        let tags: Vec<_> = frag
            .find_class("skill-tag")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(tags, vec!["Git", "Bread", "Soup"]);
    }
}
