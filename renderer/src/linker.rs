//! Resolves entity IRIs to in-page anchors or outbound links.

use std::collections::HashMap;

use crate::html::escape_html;
use crate::model::{OntologyDoc, PropertyKind};

/// `id`s the page layout uses for itself.
const LAYOUT_IDS: [&str; 4] = ["main-content", "metadata", "classes", "individuals"];

/// Extracts the local name from an IRI (the part after the last `#` or `/`).
///
/// Falls back to the whole IRI when the separator is trailing.
pub fn local_name(iri: &str) -> &str {
    let trimmed = iri.trim_end_matches(['#', '/']);
    match trimmed.rfind(['#', '/']) {
        Some(pos) if pos + 1 < trimmed.len() => &trimmed[pos + 1..],
        _ => trimmed,
    }
}

/// Turns a local name into a valid HTML `id` value.
fn anchor_from(name: &str) -> String {
    let anchor: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if anchor.is_empty() {
        String::from("entity")
    } else {
        anchor
    }
}

struct Target {
    anchor: String,
    title: String,
}

/// Maps the IRIs documented on a page to their anchors.
pub struct Linker {
    targets: HashMap<String, Target>,
}

impl Linker {
    /// Assigns a unique anchor to every entity in `doc`.
    ///
    /// Entities whose local names collide, with each other or with a
    /// section heading, get `-2`, `-3`, … suffixes in page order.
    pub fn new(doc: &OntologyDoc) -> Self {
        let mut targets = HashMap::new();
        let mut used: HashMap<String, usize> = LAYOUT_IDS
            .into_iter()
            .chain(PropertyKind::ALL.into_iter().map(PropertyKind::section_id))
            .map(|id| (id.to_string(), 1))
            .collect();

        for entity in doc.entities() {
            if targets.contains_key(&entity.iri) {
                continue;
            }
            let base = anchor_from(local_name(&entity.iri));
            let count = used.entry(base.clone()).or_insert(0);
            *count += 1;
            let anchor = if *count == 1 {
                base
            } else {
                format!("{}-{}", base, count)
            };
            targets.insert(
                entity.iri.clone(),
                Target {
                    anchor,
                    title: entity.title.clone(),
                },
            );
        }

        Self { targets }
    }

    /// Anchor for a documented IRI.
    pub fn anchor(&self, iri: &str) -> Option<&str> {
        self.targets.get(iri).map(|t| t.anchor.as_str())
    }

    /// Renders an `<a>` element for `iri`: in-page for documented
    /// entities, outbound otherwise.
    pub fn link(&self, iri: &str) -> String {
        match self.targets.get(iri) {
            Some(target) => format!(
                "<a href=\"#{}\">{}</a>",
                escape_html(&target.anchor),
                escape_html(&target.title)
            ),
            None => format!(
                "<a href=\"{}\" class=\"external\"><code>{}</code></a>",
                escape_html(iri),
                escape_html(local_name(iri))
            ),
        }
    }

    /// Comma-separated links, or `None` when `iris` is empty.
    pub fn link_list(&self, iris: &[String]) -> Option<String> {
        if iris.is_empty() {
            return None;
        }
        Some(
            iris.iter()
                .map(|iri| self.link(iri))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassDoc, Entity};

    fn class(iri: &str, title: &str) -> ClassDoc {
        ClassDoc {
            entity: Entity {
                iri: iri.to_string(),
                title: title.to_string(),
                description: None,
            },
            superclasses: Vec::new(),
            subclasses: Vec::new(),
            equivalents: Vec::new(),
            disjoint_with: Vec::new(),
            in_domain_of: Vec::new(),
            in_range_of: Vec::new(),
        }
    }

    #[test]
    fn local_name_handles_hash_and_slash() {
        assert_eq!(local_name("http://example.org/ns#Widget"), "Widget");
        assert_eq!(local_name("https://example.org/schema/Ring"), "Ring");
        assert_eq!(local_name("https://example.org/schema/"), "schema");
    }

    #[test]
    fn colliding_local_names_get_suffixes() {
        let doc = OntologyDoc {
            classes: vec![
                class("http://a.example/Thing", "A Thing"),
                class("http://b.example/Thing", "B Thing"),
            ],
            ..OntologyDoc::default()
        };
        let linker = Linker::new(&doc);
        assert_eq!(linker.anchor("http://a.example/Thing"), Some("Thing"));
        assert_eq!(linker.anchor("http://b.example/Thing"), Some("Thing-2"));
    }

    #[test]
    fn section_ids_are_never_reused() {
        let doc = OntologyDoc {
            classes: vec![
                class("http://example.org/ns#properties", "Properties"),
                class("http://example.org/ns#metadata", "Metadata"),
            ],
            ..OntologyDoc::default()
        };
        let linker = Linker::new(&doc);
        assert_eq!(linker.anchor("http://example.org/ns#properties"), Some("properties-2"));
        assert_eq!(linker.anchor("http://example.org/ns#metadata"), Some("metadata-2"));
    }

    #[test]
    fn unknown_iris_link_out() {
        let linker = Linker::new(&OntologyDoc::default());
        let html = linker.link("http://www.w3.org/2001/XMLSchema#string");
        assert!(html.contains("href=\"http://www.w3.org/2001/XMLSchema#string\""));
        assert!(html.contains("<code>string</code>"));
    }
}
