//! In-memory triple store built from a Turtle document.
//!
//! Parsing is delegated to `sophia_turtle`; the parsed terms are copied into
//! plain owned [`Node`]s so the extractor can query them without carrying
//! sophia's term traits around.

use std::collections::{HashMap, HashSet};

use sophia_api::source::TripleSource;
use sophia_api::term::{SimpleTerm, Term, TermKind};
use sophia_turtle::parser::turtle;
use thiserror::Error;

use crate::vocab::rdf;

/// A Turtle document that could not be parsed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SyntaxError(String);

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Language tag, lowercased, if any.
    pub language: Option<String>,
    /// Datatype IRI.
    pub datatype: Option<String>,
}

/// A subject or object position term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A named resource.
    Iri(String),
    /// A blank node, by its document-local label.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    /// Returns the IRI if this node is a named resource.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// A single triple. Predicates are always IRIs.
#[derive(Debug, Clone)]
pub struct Statement {
    /// Subject.
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Node,
}

/// A parsed RDF graph.
///
/// Statements are indexed by subject and by `(predicate, object IRI)` when
/// the graph is built, so every query touches only matching statements.
#[derive(Debug, Default)]
pub struct Graph {
    statements: Vec<Statement>,
    by_iri_subject: HashMap<String, Vec<usize>>,
    by_blank_subject: HashMap<String, Vec<usize>>,
    by_predicate_object: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl Graph {
    /// Parses a Turtle document.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the document is not valid Turtle.
    pub fn from_turtle(source: &str) -> Result<Self, SyntaxError> {
        let triples: Vec<[SimpleTerm<'static>; 3]> = turtle::parse_str(source)
            .collect_triples()
            .map_err(|e| SyntaxError(e.to_string()))?;

        let statements = triples
            .iter()
            .filter_map(|[s, p, o]| {
                let subject = node_from_term(s)?;
                let predicate = p.iri()?.as_str().to_owned();
                let object = node_from_term(o)?;
                Some(Statement {
                    subject,
                    predicate,
                    object,
                })
            })
            .collect();

        Ok(Self::from_statements(statements))
    }

    /// Builds the lookup indexes over `statements`.
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        let mut graph = Self::default();
        for (i, st) in statements.iter().enumerate() {
            match &st.subject {
                Node::Iri(iri) => graph.by_iri_subject.entry(iri.clone()).or_default().push(i),
                Node::Blank(label) => graph
                    .by_blank_subject
                    .entry(label.clone())
                    .or_default()
                    .push(i),
                Node::Literal(_) => {}
            }
            if let Node::Iri(object) = &st.object {
                graph
                    .by_predicate_object
                    .entry(st.predicate.clone())
                    .or_default()
                    .entry(object.clone())
                    .or_default()
                    .push(i);
            }
        }
        graph.statements = statements;
        graph
    }

    /// Number of statements held.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the graph holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    fn select<'a>(
        &'a self,
        found: Option<&'a Vec<usize>>,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Statement> + 'a {
        found
            .into_iter()
            .flatten()
            .filter_map(move |&i| self.statements.get(i))
            .filter(move |st| st.predicate == predicate)
    }

    /// All objects of `(subject, predicate, ?)`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.select(self.by_iri_subject.get(subject), predicate)
            .map(|st| &st.object)
    }

    /// All objects of `(subject, predicate, ?)` for a blank-node subject.
    pub fn blank_objects<'a>(
        &'a self,
        label: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.select(self.by_blank_subject.get(label), predicate)
            .map(|st| &st.object)
    }

    /// IRI objects of `(subject, predicate, ?)`, in document order, deduplicated.
    pub fn iri_objects(&self, subject: &str, predicate: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.objects(subject, predicate)
            .filter_map(Node::as_iri)
            .filter(|iri| seen.insert(*iri))
            .map(str::to_owned)
            .collect()
    }

    /// IRI subjects of `(?, predicate, object)`, in document order, deduplicated.
    pub fn iri_subjects(&self, predicate: &str, object: &str) -> Vec<String> {
        let Some(found) = self
            .by_predicate_object
            .get(predicate)
            .and_then(|objects| objects.get(object))
        else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        found
            .iter()
            .filter_map(|&i| self.statements.get(i))
            .filter_map(|st| st.subject.as_iri())
            .filter(|iri| seen.insert(*iri))
            .map(str::to_owned)
            .collect()
    }

    /// Named resources declared with `rdf:type <class>`.
    pub fn instances_of(&self, class: &str) -> Vec<String> {
        self.iri_subjects(rdf::TYPE, class)
    }

    /// Returns true if `subject` is declared with `rdf:type <class>`.
    pub fn has_type(&self, subject: &str, class: &str) -> bool {
        self.objects(subject, rdf::TYPE)
            .any(|o| o.as_iri() == Some(class))
    }

    /// Picks the best literal among the given predicates, tried in order.
    ///
    /// English or untagged literals win over other languages; the first
    /// predicate with any literal at all decides.
    pub fn preferred_literal(&self, subject: &str, predicates: &[&str]) -> Option<String> {
        predicates.iter().find_map(|predicate| {
            let literals: Vec<&Literal> = self
                .objects(subject, predicate)
                .filter_map(Node::as_literal)
                .collect();
            pick_literal(&literals)
        })
    }
}

fn pick_literal(literals: &[&Literal]) -> Option<String> {
    let english = literals.iter().find(|lit| {
        lit.language
            .as_deref()
            .map(|tag| tag == "en" || tag.starts_with("en-"))
            .unwrap_or(false)
    });
    let untagged = literals.iter().find(|lit| lit.language.is_none());
    english
        .or(untagged)
        .or_else(|| literals.first())
        .map(|lit| lit.value.trim().to_owned())
}

fn node_from_term<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_owned())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?;
            let value = String::from(&*lexical);
            let language = term.language_tag().map(|tag| tag.as_str().to_lowercase());
            let datatype = term.datatype().map(|dt| dt.as_str().to_owned());
            Some(Node::Literal(Literal {
                value,
                language,
                datatype,
            }))
        }
        // Quoted triples and variables carry nothing the documentation shows.
        _ => None,
    }
}
