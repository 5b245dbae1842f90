//! Renders an [`OntologyDoc`] as a single self-contained HTML page.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::linker::Linker;
use crate::model::{
    ClassDoc, Entity, IndividualDoc, Metadata, OntologyDoc, PropertyDoc, PropertyKind, Value,
};

const STYLE: &str = r#"
body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; line-height: 1.5; margin: 0; color: #1d2330; }
main { max-width: 60rem; margin: 0 auto; padding: 2rem 1.5rem 4rem; }
h1 { margin-bottom: 0.25rem; }
h2 { border-bottom: 1px solid #d0d5e0; padding-bottom: 0.25rem; margin-top: 2.5rem; }
code { font-size: 0.9em; }
a { color: #1a5fb4; }
a.external { color: #4a5568; }
dl.metadata { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1rem; }
dl.metadata dt { font-weight: 600; }
dl.metadata dd { margin: 0; }
nav.toc ul { list-style: none; padding-left: 1rem; }
section.entity { border: 1px solid #e2e6ee; border-radius: 6px; padding: 0.75rem 1rem; margin: 1rem 0; }
section.entity h3 { margin: 0 0 0.25rem; }
section.entity .iri { color: #4a5568; font-size: 0.85em; }
table.relations th { text-align: left; padding-right: 1rem; vertical-align: top; white-space: nowrap; }
.badge { display: inline-block; background: #edf1f7; border-radius: 4px; padding: 0 0.4rem; margin-right: 0.25rem; font-size: 0.8em; }
"#;

/// Renders the complete HTML page for `doc`.
pub fn render_page(doc: &OntologyDoc) -> String {
    let linker = Linker::new(doc);
    let meta = &doc.metadata;

    let mut content = format!("<h1>{}</h1>\n", escape_html(&meta.title));
    if let Some(iri) = &meta.iri {
        content.push_str(&format!(
            "<p class=\"iri\"><code>{}</code></p>\n",
            escape_html(iri)
        ));
    }

    content.push_str(&render_toc(doc));
    content.push_str(&render_metadata(meta));

    if !doc.classes.is_empty() {
        content.push_str("<h2 id=\"classes\">Classes</h2>\n");
        for class in &doc.classes {
            content.push_str(&render_class(class, &linker));
        }
    }

    for kind in PropertyKind::ALL {
        let mut props = doc.properties_of(kind).peekable();
        if props.peek().is_none() {
            continue;
        }
        content.push_str(&format!(
            "<h2 id=\"{}\">{}</h2>\n",
            kind.section_id(),
            kind.heading()
        ));
        for prop in props {
            content.push_str(&render_property(prop, &linker));
        }
    }

    if !doc.individuals.is_empty() {
        content.push_str("<h2 id=\"individuals\">Named Individuals</h2>\n");
        for ind in &doc.individuals {
            content.push_str(&render_individual(ind, &linker));
        }
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<main id="main-content">
{content}
</main>
</body>
</html>
"##,
        title = escape_html(&meta.title),
        style = STYLE,
        content = content,
    )
}

fn render_toc(doc: &OntologyDoc) -> String {
    let mut items = String::from("<li><a href=\"#metadata\">Metadata</a></li>\n");
    if !doc.classes.is_empty() {
        items.push_str(&format!(
            "<li><a href=\"#classes\">Classes</a> ({})</li>\n",
            doc.classes.len()
        ));
    }
    for kind in PropertyKind::ALL {
        let count = doc.properties_of(kind).count();
        if count > 0 {
            items.push_str(&format!(
                "<li><a href=\"#{}\">{}</a> ({})</li>\n",
                kind.section_id(),
                kind.heading(),
                count
            ));
        }
    }
    if !doc.individuals.is_empty() {
        items.push_str(&format!(
            "<li><a href=\"#individuals\">Named Individuals</a> ({})</li>\n",
            doc.individuals.len()
        ));
    }
    format!(
        "<nav class=\"toc\" aria-label=\"Table of contents\">\n<h2>Contents</h2>\n<ul>\n{}</ul>\n</nav>\n",
        items
    )
}

fn render_metadata(meta: &Metadata) -> String {
    let mut rows = String::new();
    let mut row = |label: &str, value: String| {
        rows.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", label, value));
    };

    if let Some(iri) = &meta.iri {
        row("IRI", iri_link(iri));
    }
    if let Some(iri) = &meta.version_iri {
        row("Version IRI", iri_link(iri));
    }
    if let Some(info) = &meta.version_info {
        row("Version", escape_html(info));
    }
    if !meta.creators.is_empty() {
        row("Creators", value_list(&meta.creators));
    }
    if !meta.contributors.is_empty() {
        row("Contributors", value_list(&meta.contributors));
    }
    if !meta.publishers.is_empty() {
        row("Publishers", value_list(&meta.publishers));
    }
    if let Some(license) = &meta.license {
        row("License", render_value(license));
    }
    if let Some(rights) = &meta.rights {
        row("Rights", escape_html(rights));
    }
    if let Some(created) = &meta.created {
        row("Created", escape_html(created));
    }
    if let Some(modified) = &meta.modified {
        row("Modified", escape_html(modified));
    }
    if let Some(issued) = &meta.issued {
        row("Issued", escape_html(issued));
    }
    if !meta.imports.is_empty() {
        let links: Vec<String> = meta.imports.iter().map(|i| iri_link(i)).collect();
        row("Imports", links.join("<br>"));
    }

    let mut out = String::from("<h2 id=\"metadata\">Metadata</h2>\n");
    if !rows.is_empty() {
        out.push_str(&format!("<dl class=\"metadata\">\n{}</dl>\n", rows));
    }
    if let Some(description) = &meta.description {
        out.push_str(&format!(
            "<div class=\"description\">\n{}</div>\n",
            markdown_to_html(description)
        ));
    }
    out
}

fn iri_link(iri: &str) -> String {
    format!(
        "<a href=\"{0}\"><code>{0}</code></a>",
        escape_html(iri)
    )
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Iri { iri, name: Some(name) } => {
            format!("<a href=\"{}\">{}</a>", escape_html(iri), escape_html(name))
        }
        Value::Iri { iri, name: None } => iri_link(iri),
        Value::Text(text) => escape_html(text),
    }
}

fn value_list(values: &[Value]) -> String {
    values
        .iter()
        .map(render_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Opens an entity `<section>` with its heading, IRI and description.
fn entity_header(entity: &Entity, linker: &Linker, badges: &[&str]) -> String {
    let anchor = linker.anchor(&entity.iri).unwrap_or_default();
    let badges: String = badges
        .iter()
        .map(|b| format!("<span class=\"badge\">{}</span>", escape_html(b)))
        .collect();
    let mut out = format!(
        "<section class=\"entity\" id=\"{anchor}\">\n<h3>{title} {badges}</h3>\n<p class=\"iri\"><code>{iri}</code></p>\n",
        anchor = escape_html(anchor),
        title = escape_html(&entity.title),
        badges = badges,
        iri = escape_html(&entity.iri),
    );
    if let Some(description) = &entity.description {
        out.push_str(&markdown_to_html(description));
    }
    out
}

fn relations_table(rows: &[(&str, Option<String>)]) -> String {
    let body: String = rows
        .iter()
        .filter_map(|(label, html)| {
            html.as_ref()
                .map(|html| format!("<tr><th>{}</th><td>{}</td></tr>\n", label, html))
        })
        .collect();
    if body.is_empty() {
        String::new()
    } else {
        format!("<table class=\"relations\">\n{}</table>\n", body)
    }
}

fn render_class(class: &ClassDoc, linker: &Linker) -> String {
    let mut out = entity_header(&class.entity, linker, &[]);
    out.push_str(&relations_table(&[
        ("Super-classes", linker.link_list(&class.superclasses)),
        ("Sub-classes", linker.link_list(&class.subclasses)),
        ("Equivalent to", linker.link_list(&class.equivalents)),
        ("Disjoint with", linker.link_list(&class.disjoint_with)),
        ("In domain of", linker.link_list(&class.in_domain_of)),
        ("In range of", linker.link_list(&class.in_range_of)),
    ]));
    out.push_str("</section>\n");
    out
}

fn render_property(prop: &PropertyDoc, linker: &Linker) -> String {
    let mut out = entity_header(&prop.entity, linker, &prop.characteristics);
    out.push_str(&relations_table(&[
        ("Domain", linker.link_list(&prop.domains)),
        ("Range", linker.link_list(&prop.ranges)),
        ("Super-properties", linker.link_list(&prop.superproperties)),
        ("Inverse of", linker.link_list(&prop.inverse_of)),
    ]));
    out.push_str("</section>\n");
    out
}

fn render_individual(ind: &IndividualDoc, linker: &Linker) -> String {
    let mut out = entity_header(&ind.entity, linker, &[]);
    out.push_str(&relations_table(&[("Types", linker.link_list(&ind.types))]));
    out.push_str("</section>\n");
    out
}

/// Converts Markdown to HTML using pulldown-cmark.
///
/// Descriptions come from the ontology being documented, so raw HTML in
/// them is shown as text rather than passed through.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, opts).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::graph::Graph;

    const VOCAB: &str = r#"
@prefix ex:   <http://example.org/shop#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<http://example.org/shop> a owl:Ontology ;
    rdfs:label "Shop <Vocabulary>" ;
    rdfs:comment "Describes *orders*." .

ex:Order a owl:Class ; rdfs:comment "A customer order." .
ex:placedBy a owl:ObjectProperty ;
    rdfs:domain ex:Order ;
    rdfs:range <http://xmlns.com/foaf/0.1/Agent> .
"#;

    fn page() -> String {
        let graph = Graph::from_turtle(VOCAB).unwrap();
        render_page(&extract(&graph, "shop"))
    }

    #[test]
    fn escapes_title() {
        let html = page();
        assert!(html.contains("<title>Shop &lt;Vocabulary&gt;</title>"));
    }

    #[test]
    fn renders_markdown_descriptions() {
        let html = page();
        assert!(html.contains("<em>orders</em>"));
    }

    #[test]
    fn links_local_terms_internally() {
        let html = page();
        assert!(html.contains("<section class=\"entity\" id=\"Order\">"));
        assert!(html.contains("<a href=\"#Order\">Order</a>"));
        assert!(html.contains("href=\"http://xmlns.com/foaf/0.1/Agent\""));
    }

    #[test]
    fn omits_empty_sections() {
        let html = page();
        assert!(html.contains("id=\"objectproperties\""));
        assert!(!html.contains("id=\"datatypeproperties\""));
        assert!(!html.contains("id=\"individuals\""));
    }

    #[test]
    fn raw_html_in_descriptions_is_shown_as_text() {
        let inline = markdown_to_html("Click <img src=x onerror=alert(1)> here.");
        assert!(!inline.contains("<img"), "{}", inline);
        assert!(inline.contains("&lt;img src=x onerror=alert(1)&gt;"));

        let block = markdown_to_html("<script>alert(1)</script>\n");
        assert!(!block.contains("<script>"), "{}", block);
        assert!(block.contains("&lt;script&gt;"));
    }

    #[test]
    fn escape_html_escapes_specials() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
