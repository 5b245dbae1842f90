//! Extracts the documentation model from a parsed ontology graph.

use std::collections::HashSet;

use crate::graph::{Graph, Node};
use crate::linker::local_name;
use crate::model::{
    ClassDoc, Entity, IndividualDoc, Metadata, OntologyDoc, PropertyDoc, PropertyKind, Value,
};
use crate::vocab::{self, dc, owl, rdf, rdfs};

/// Builds the documentation model for `graph`.
///
/// `fallback_title` names the page when the graph declares no
/// `owl:Ontology` or gives it no title.
pub fn extract(graph: &Graph, fallback_title: &str) -> OntologyDoc {
    let metadata = extract_metadata(graph, fallback_title);

    let mut classes: Vec<ClassDoc> = class_iris(graph)
        .into_iter()
        .map(|iri| extract_class(graph, iri))
        .collect();
    sort_by_title(&mut classes, |c| &c.entity);

    let mut properties: Vec<PropertyDoc> = property_iris(graph)
        .into_iter()
        .map(|(iri, kind)| extract_property(graph, iri, kind))
        .collect();
    sort_by_title(&mut properties, |p| &p.entity);

    let class_set: Vec<&str> = classes.iter().map(|c| c.entity.iri.as_str()).collect();
    let mut individuals: Vec<IndividualDoc> = individual_iris(graph, &class_set)
        .into_iter()
        .map(|iri| extract_individual(graph, iri))
        .collect();
    sort_by_title(&mut individuals, |i| &i.entity);

    OntologyDoc {
        metadata,
        classes,
        properties,
        individuals,
    }
}

fn sort_by_title<T>(items: &mut [T], key: impl Fn(&T) -> &Entity) {
    items.sort_by(|a, b| {
        let (a, b) = (key(a), key(b));
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.iri.cmp(&b.iri))
    });
}

fn extract_metadata(graph: &Graph, fallback_title: &str) -> Metadata {
    let Some(iri) = graph.instances_of(owl::ONTOLOGY).into_iter().next() else {
        return Metadata {
            title: fallback_title.to_string(),
            ..Metadata::default()
        };
    };

    let title = graph
        .preferred_literal(&iri, vocab::TITLE_PREDICATES)
        .unwrap_or_else(|| fallback_title.to_string());

    Metadata {
        title,
        description: graph.preferred_literal(&iri, vocab::DESCRIPTION_PREDICATES),
        version_iri: graph.iri_objects(&iri, owl::VERSION_IRI).into_iter().next(),
        version_info: graph.preferred_literal(&iri, &[owl::VERSION_INFO]),
        creators: agents(graph, &iri, &[dc::TERMS_CREATOR, dc::ELEMENTS_CREATOR]),
        contributors: agents(graph, &iri, &[dc::TERMS_CONTRIBUTOR, dc::ELEMENTS_CONTRIBUTOR]),
        publishers: agents(graph, &iri, &[dc::TERMS_PUBLISHER, dc::ELEMENTS_PUBLISHER]),
        license: agents(graph, &iri, &[dc::TERMS_LICENSE]).into_iter().next(),
        rights: graph.preferred_literal(&iri, &[dc::TERMS_RIGHTS, dc::ELEMENTS_RIGHTS]),
        created: graph.preferred_literal(&iri, &[dc::TERMS_CREATED]),
        modified: graph.preferred_literal(&iri, &[dc::TERMS_MODIFIED]),
        issued: graph.preferred_literal(&iri, &[dc::TERMS_ISSUED]),
        imports: graph.iri_objects(&iri, owl::IMPORTS),
        iri: Some(iri),
    }
}

/// Collects agent-like values (creators, publishers, licenses).
fn agents(graph: &Graph, subject: &str, predicates: &[&str]) -> Vec<Value> {
    let mut out = Vec::new();
    for predicate in predicates {
        for object in graph.objects(subject, predicate) {
            let value = match object {
                Node::Iri(iri) => Value::Iri {
                    iri: iri.clone(),
                    name: graph.preferred_literal(iri, vocab::AGENT_NAMES),
                },
                Node::Literal(lit) => Value::Text(lit.value.trim().to_string()),
                Node::Blank(label) => match blank_agent_name(graph, label) {
                    Some(name) => Value::Text(name),
                    None => continue,
                },
            };
            if !out.contains(&value) {
                out.push(value);
            }
        }
    }
    out
}

fn blank_agent_name(graph: &Graph, label: &str) -> Option<String> {
    vocab::AGENT_NAMES.iter().find_map(|predicate| {
        graph
            .blank_objects(label, predicate)
            .find_map(Node::as_literal)
            .map(|lit| lit.value.trim().to_string())
    })
}

fn entity(graph: &Graph, iri: String) -> Entity {
    let title = graph
        .preferred_literal(&iri, vocab::TITLE_PREDICATES)
        .unwrap_or_else(|| local_name(&iri).to_string());
    Entity {
        description: graph.preferred_literal(&iri, vocab::DESCRIPTION_PREDICATES),
        title,
        iri,
    }
}

fn class_iris(graph: &Graph) -> Vec<String> {
    unique([owl::CLASS, rdfs::CLASS].into_iter().flat_map(|class| graph.instances_of(class)))
}

fn property_iris(graph: &Graph) -> Vec<(String, PropertyKind)> {
    let declared = [
        (owl::OBJECT_PROPERTY, PropertyKind::Object),
        (owl::DATATYPE_PROPERTY, PropertyKind::Datatype),
        (owl::ANNOTATION_PROPERTY, PropertyKind::Annotation),
        (rdf::PROPERTY, PropertyKind::Rdf),
    ];
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (class, kind) in declared {
        for iri in graph.instances_of(class) {
            if seen.insert(iri.clone()) {
                out.push((iri, kind));
            }
        }
    }
    out
}

fn individual_iris(graph: &Graph, classes: &[&str]) -> Vec<String> {
    unique(
        std::iter::once(owl::NAMED_INDIVIDUAL)
            .chain(classes.iter().copied())
            .flat_map(|class| graph.instances_of(class)),
    )
}

/// First occurrence of each IRI, in order.
fn unique(iris: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    iris.filter(|iri| seen.insert(iri.clone())).collect()
}

fn extract_class(graph: &Graph, iri: String) -> ClassDoc {
    let superclasses = graph.iri_objects(&iri, rdfs::SUB_CLASS_OF);
    let subclasses = graph.iri_subjects(rdfs::SUB_CLASS_OF, &iri);
    let mut equivalents = graph.iri_objects(&iri, owl::EQUIVALENT_CLASS);
    for other in graph.iri_subjects(owl::EQUIVALENT_CLASS, &iri) {
        if !equivalents.contains(&other) {
            equivalents.push(other);
        }
    }
    let mut disjoint_with = graph.iri_objects(&iri, owl::DISJOINT_WITH);
    for other in graph.iri_subjects(owl::DISJOINT_WITH, &iri) {
        if !disjoint_with.contains(&other) {
            disjoint_with.push(other);
        }
    }
    let in_domain_of = graph.iri_subjects(rdfs::DOMAIN, &iri);
    let in_range_of = graph.iri_subjects(rdfs::RANGE, &iri);

    ClassDoc {
        entity: entity(graph, iri),
        superclasses,
        subclasses,
        equivalents,
        disjoint_with,
        in_domain_of,
        in_range_of,
    }
}

fn extract_property(graph: &Graph, iri: String, kind: PropertyKind) -> PropertyDoc {
    let characteristics = [
        (owl::FUNCTIONAL_PROPERTY, "Functional"),
        (owl::INVERSE_FUNCTIONAL_PROPERTY, "Inverse Functional"),
        (owl::TRANSITIVE_PROPERTY, "Transitive"),
        (owl::SYMMETRIC_PROPERTY, "Symmetric"),
    ]
    .into_iter()
    .filter(|(class, _)| graph.has_type(&iri, class))
    .map(|(_, label)| label)
    .collect();

    let mut inverse_of = graph.iri_objects(&iri, owl::INVERSE_OF);
    for other in graph.iri_subjects(owl::INVERSE_OF, &iri) {
        if !inverse_of.contains(&other) {
            inverse_of.push(other);
        }
    }

    PropertyDoc {
        domains: graph.iri_objects(&iri, rdfs::DOMAIN),
        ranges: graph.iri_objects(&iri, rdfs::RANGE),
        superproperties: graph.iri_objects(&iri, rdfs::SUB_PROPERTY_OF),
        inverse_of,
        characteristics,
        kind,
        entity: entity(graph, iri),
    }
}

fn extract_individual(graph: &Graph, iri: String) -> IndividualDoc {
    let types = graph
        .iri_objects(&iri, rdf::TYPE)
        .into_iter()
        .filter(|t| t != owl::NAMED_INDIVIDUAL)
        .collect();
    IndividualDoc {
        entity: entity(graph, iri),
        types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIZZA: &str = r#"
@prefix :     <http://example.org/pizza#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix sdo:  <https://schema.org/> .

<http://example.org/pizza> a owl:Ontology ;
    dcterms:title "Pizza Ontology"@en ;
    dcterms:description "Pizzas and their **toppings**." ;
    owl:versionInfo "1.2" ;
    dcterms:creator [ sdo:name "Ada" ] , <https://example.org/people/bob> ;
    owl:imports <http://example.org/food> .

:Pizza a owl:Class ; rdfs:label "Pizza" .
:Margherita a owl:Class ; rdfs:subClassOf :Pizza ; owl:disjointWith :Hawaiian .
:Hawaiian a owl:Class ; rdfs:subClassOf :Pizza .
:Topping a owl:Class .

:hasTopping a owl:ObjectProperty , owl:TransitiveProperty ;
    rdfs:domain :Pizza ;
    rdfs:range :Topping .

:isToppingOf a owl:ObjectProperty ; owl:inverseOf :hasTopping .

:calories a owl:DatatypeProperty , owl:FunctionalProperty ;
    rdfs:range xsd:integer .

:Mozzarella a :Topping .
"#;

    fn doc() -> OntologyDoc {
        let graph = Graph::from_turtle(PIZZA).unwrap();
        extract(&graph, "pizza")
    }

    #[test]
    fn reads_ontology_metadata() {
        let doc = doc();
        let meta = &doc.metadata;
        assert_eq!(meta.iri.as_deref(), Some("http://example.org/pizza"));
        assert_eq!(meta.title, "Pizza Ontology");
        assert_eq!(meta.version_info.as_deref(), Some("1.2"));
        assert_eq!(meta.imports, vec!["http://example.org/food".to_string()]);
        assert_eq!(meta.creators.len(), 2);
        assert!(meta.creators.contains(&Value::Text("Ada".to_string())));
    }

    #[test]
    fn falls_back_to_stem_without_ontology_node() {
        let graph = Graph::from_turtle(
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n<http://x.example/A> a owl:Class .\n",
        )
        .unwrap();
        let doc = extract(&graph, "bare_vocab");
        assert_eq!(doc.metadata.title, "bare_vocab");
        assert!(doc.metadata.iri.is_none());
        assert_eq!(doc.classes.len(), 1);
        assert_eq!(doc.classes[0].entity.title, "A");
    }

    #[test]
    fn classes_are_sorted_and_related() {
        let doc = doc();
        let titles: Vec<&str> = doc.classes.iter().map(|c| c.entity.title.as_str()).collect();
        assert_eq!(titles, vec!["Hawaiian", "Margherita", "Pizza", "Topping"]);

        let pizza = doc.classes.iter().find(|c| c.entity.title == "Pizza").unwrap();
        assert_eq!(pizza.subclasses.len(), 2);
        assert_eq!(
            pizza.in_domain_of,
            vec!["http://example.org/pizza#hasTopping".to_string()]
        );

        let hawaiian = doc.classes.iter().find(|c| c.entity.title == "Hawaiian").unwrap();
        assert_eq!(
            hawaiian.disjoint_with,
            vec!["http://example.org/pizza#Margherita".to_string()]
        );
    }

    #[test]
    fn properties_carry_kind_and_characteristics() {
        let doc = doc();
        let has_topping = doc
            .properties
            .iter()
            .find(|p| p.entity.title == "hasTopping")
            .unwrap();
        assert_eq!(has_topping.kind, PropertyKind::Object);
        assert_eq!(has_topping.characteristics, vec!["Transitive"]);
        assert_eq!(
            has_topping.inverse_of,
            vec!["http://example.org/pizza#isToppingOf".to_string()]
        );

        let calories = doc
            .properties
            .iter()
            .find(|p| p.entity.title == "calories")
            .unwrap();
        assert_eq!(calories.kind, PropertyKind::Datatype);
        assert_eq!(calories.characteristics, vec!["Functional"]);
    }

    #[test]
    fn instances_of_local_classes_are_individuals() {
        let doc = doc();
        assert_eq!(doc.individuals.len(), 1);
        assert_eq!(doc.individuals[0].entity.title, "Mozzarella");
        assert_eq!(
            doc.individuals[0].types,
            vec!["http://example.org/pizza#Topping".to_string()]
        );
    }
}
