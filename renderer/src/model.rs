//! Documentation model extracted from an ontology graph.
//!
//! These types hold exactly what the HTML page shows. All IRIs are full
//! IRIs; the page resolves them to anchors or outbound links at render time.

/// A metadata value: either a resource or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A named resource, optionally with a human-readable name.
    Iri {
        /// Full IRI.
        iri: String,
        /// Display name, if the graph gave one.
        name: Option<String>,
    },
    /// A literal (or a blank-node agent's name).
    Text(String),
}

/// Ontology-level metadata.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// IRI of the `owl:Ontology` node, if one was declared.
    pub iri: Option<String>,
    /// Page title.
    pub title: String,
    /// Markdown description.
    pub description: Option<String>,
    /// `owl:versionIRI`.
    pub version_iri: Option<String>,
    /// `owl:versionInfo`.
    pub version_info: Option<String>,
    /// Creators.
    pub creators: Vec<Value>,
    /// Contributors.
    pub contributors: Vec<Value>,
    /// Publishers.
    pub publishers: Vec<Value>,
    /// License.
    pub license: Option<Value>,
    /// Rights statement.
    pub rights: Option<String>,
    /// Creation date.
    pub created: Option<String>,
    /// Modification date.
    pub modified: Option<String>,
    /// Issue date.
    pub issued: Option<String>,
    /// `owl:imports` targets.
    pub imports: Vec<String>,
}

/// Fields shared by every documented entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Full IRI.
    pub iri: String,
    /// Display title.
    pub title: String,
    /// Markdown description.
    pub description: Option<String>,
}

/// A documented class.
#[derive(Debug, Clone)]
pub struct ClassDoc {
    /// Identity.
    pub entity: Entity,
    /// `rdfs:subClassOf` targets (named classes only).
    pub superclasses: Vec<String>,
    /// Classes declaring this one as a superclass.
    pub subclasses: Vec<String>,
    /// `owl:equivalentClass` targets.
    pub equivalents: Vec<String>,
    /// `owl:disjointWith` targets.
    pub disjoint_with: Vec<String>,
    /// Properties whose domain includes this class.
    pub in_domain_of: Vec<String>,
    /// Properties whose range includes this class.
    pub in_range_of: Vec<String>,
}

/// Property flavour, in the order sections appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PropertyKind {
    /// `owl:ObjectProperty`
    Object,
    /// `owl:DatatypeProperty`
    Datatype,
    /// `owl:AnnotationProperty`
    Annotation,
    /// Plain `rdf:Property`
    Rdf,
}

impl PropertyKind {
    /// Section heading.
    pub fn heading(self) -> &'static str {
        match self {
            PropertyKind::Object => "Object Properties",
            PropertyKind::Datatype => "Datatype Properties",
            PropertyKind::Annotation => "Annotation Properties",
            PropertyKind::Rdf => "Properties",
        }
    }

    /// HTML id of the section.
    pub fn section_id(self) -> &'static str {
        match self {
            PropertyKind::Object => "objectproperties",
            PropertyKind::Datatype => "datatypeproperties",
            PropertyKind::Annotation => "annotationproperties",
            PropertyKind::Rdf => "properties",
        }
    }

    /// All kinds, in page order.
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::Object,
        PropertyKind::Datatype,
        PropertyKind::Annotation,
        PropertyKind::Rdf,
    ];
}

/// A documented property.
#[derive(Debug, Clone)]
pub struct PropertyDoc {
    /// Identity.
    pub entity: Entity,
    /// Flavour.
    pub kind: PropertyKind,
    /// `rdfs:domain` targets.
    pub domains: Vec<String>,
    /// `rdfs:range` targets.
    pub ranges: Vec<String>,
    /// `rdfs:subPropertyOf` targets.
    pub superproperties: Vec<String>,
    /// `owl:inverseOf` targets.
    pub inverse_of: Vec<String>,
    /// Characteristic labels such as `Functional`.
    pub characteristics: Vec<&'static str>,
}

/// A documented named individual.
#[derive(Debug, Clone)]
pub struct IndividualDoc {
    /// Identity.
    pub entity: Entity,
    /// Classes it is declared an instance of (`owl:NamedIndividual` excluded).
    pub types: Vec<String>,
}

/// Everything rendered for one ontology file.
#[derive(Debug, Clone, Default)]
pub struct OntologyDoc {
    /// Ontology-level metadata.
    pub metadata: Metadata,
    /// Classes, sorted by title.
    pub classes: Vec<ClassDoc>,
    /// Properties of every kind, sorted by title.
    pub properties: Vec<PropertyDoc>,
    /// Named individuals, sorted by title.
    pub individuals: Vec<IndividualDoc>,
}

impl OntologyDoc {
    /// Properties of one kind, in page order.
    pub fn properties_of(&self, kind: PropertyKind) -> impl Iterator<Item = &PropertyDoc> {
        self.properties.iter().filter(move |p| p.kind == kind)
    }

    /// Every documented entity, classes first.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.classes
            .iter()
            .map(|c| &c.entity)
            .chain(self.properties.iter().map(|p| &p.entity))
            .chain(self.individuals.iter().map(|i| &i.entity))
    }
}
