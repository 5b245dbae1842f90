//! IRIs of the vocabulary terms the extractor looks for.

/// `rdf:` namespace.
pub mod rdf {
    /// `rdf:type`
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
}

/// `rdfs:` namespace.
pub mod rdfs {
    /// `rdfs:label`
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:Class`
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:subClassOf`
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// `owl:` namespace.
pub mod owl {
    /// `owl:Ontology`
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:FunctionalProperty`
    pub const FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:InverseFunctionalProperty`
    pub const INVERSE_FUNCTIONAL_PROPERTY: &str =
        "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
    /// `owl:TransitiveProperty`
    pub const TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
    /// `owl:SymmetricProperty`
    pub const SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
    /// `owl:NamedIndividual`
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:equivalentClass`
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:disjointWith`
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    /// `owl:inverseOf`
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    /// `owl:imports`
    pub const IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// `owl:versionIRI`
    pub const VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
    /// `owl:versionInfo`
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
}

/// `skos:` namespace.
pub mod skos {
    /// `skos:prefLabel`
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    /// `skos:definition`
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
}

/// Dublin Core terms (`dcterms:`) and elements (`dc:`).
pub mod dc {
    /// `dcterms:title`
    pub const TERMS_TITLE: &str = "http://purl.org/dc/terms/title";
    /// `dcterms:description`
    pub const TERMS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// `dcterms:creator`
    pub const TERMS_CREATOR: &str = "http://purl.org/dc/terms/creator";
    /// `dcterms:contributor`
    pub const TERMS_CONTRIBUTOR: &str = "http://purl.org/dc/terms/contributor";
    /// `dcterms:publisher`
    pub const TERMS_PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    /// `dcterms:license`
    pub const TERMS_LICENSE: &str = "http://purl.org/dc/terms/license";
    /// `dcterms:rights`
    pub const TERMS_RIGHTS: &str = "http://purl.org/dc/terms/rights";
    /// `dcterms:created`
    pub const TERMS_CREATED: &str = "http://purl.org/dc/terms/created";
    /// `dcterms:modified`
    pub const TERMS_MODIFIED: &str = "http://purl.org/dc/terms/modified";
    /// `dcterms:issued`
    pub const TERMS_ISSUED: &str = "http://purl.org/dc/terms/issued";
    /// `dc:title`
    pub const ELEMENTS_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    /// `dc:description`
    pub const ELEMENTS_DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
    /// `dc:creator`
    pub const ELEMENTS_CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
    /// `dc:contributor`
    pub const ELEMENTS_CONTRIBUTOR: &str = "http://purl.org/dc/elements/1.1/contributor";
    /// `dc:publisher`
    pub const ELEMENTS_PUBLISHER: &str = "http://purl.org/dc/elements/1.1/publisher";
    /// `dc:rights`
    pub const ELEMENTS_RIGHTS: &str = "http://purl.org/dc/elements/1.1/rights";
}

/// Agent name properties used for blank-node creators and publishers.
pub const AGENT_NAMES: &[&str] = &[
    "https://schema.org/name",
    "http://schema.org/name",
    "http://xmlns.com/foaf/0.1/name",
];

/// Predicates tried, in order, for a resource's display title.
pub const TITLE_PREDICATES: &[&str] = &[
    rdfs::LABEL,
    skos::PREF_LABEL,
    dc::TERMS_TITLE,
    dc::ELEMENTS_TITLE,
];

/// Predicates tried, in order, for a resource's description.
pub const DESCRIPTION_PREDICATES: &[&str] = &[
    skos::DEFINITION,
    rdfs::COMMENT,
    dc::TERMS_DESCRIPTION,
    dc::ELEMENTS_DESCRIPTION,
];
