//! Whole-batch behaviour with stand-in and real renderers.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use ontodoc_docs::{discover, generate, run, DocsConfig, DocsError};
use ontodoc_renderer::{OntPub, RenderError};

/// Writes a trivial page; fails for any input whose stem starts with `broken`.
fn stand_in(input: &Path, output: &Path) -> Result<(), RenderError> {
    let stem = input.file_stem().unwrap().to_string_lossy();
    if stem.starts_with("broken") {
        return Err(RenderError::Failed(format!("cannot render {}", stem)));
    }
    fs::write(output, format!("<h1>{}</h1>", stem)).map_err(|source| RenderError::Write {
        path: output.to_path_buf(),
        source,
    })
}

struct Workspace {
    _dir: tempfile::TempDir,
    config: DocsConfig,
}

impl Workspace {
    fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("ontologies");
        fs::create_dir(&source).unwrap();
        for (name, content) in files {
            fs::write(source.join(name), content).unwrap();
        }
        let config = DocsConfig {
            source_dir: source,
            out_dir: dir.path().join("public").join("docs"),
            ..DocsConfig::default()
        };
        Self { _dir: dir, config }
    }

    fn out(&self, name: &str) -> PathBuf {
        self.config.out_dir.join(name)
    }

    fn out_listing(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.config.out_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[test]
fn all_inputs_succeed() {
    let ws = Workspace::with_files(&[("alpha.ttl", "a"), ("beta_one.ttl", "b")]);

    let report = generate(&ws.config, &stand_in).unwrap();

    assert!(report.all_succeeded());
    assert_eq!(report.success_count(), 2);
    assert_eq!(
        ws.out_listing(),
        vec!["alpha.html", "alpha.ttl", "beta_one.html", "beta_one.ttl", "index.html"]
    );
    assert_eq!(report.index.as_deref(), Some(ws.out("index.html").as_path()));

    let index = fs::read_to_string(ws.out("index.html")).unwrap();
    assert!(index.contains(">Alpha</a>"));
    assert!(index.contains(">Beta One</a>"));
}

#[test]
fn failed_input_does_not_stop_the_batch() {
    let ws = Workspace::with_files(&[
        ("alpha.ttl", "a"),
        ("broken.ttl", "b"),
        ("gamma.ttl", "c"),
    ]);
    let seen = RefCell::new(Vec::new());

    let inputs = discover(&ws.config).unwrap();
    let report = run(&ws.config, &stand_in, &inputs, |result| {
        seen.borrow_mut().push((result.input.file_name.clone(), result.succeeded()));
    })
    .unwrap();

    assert!(!report.all_succeeded());
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(
        seen.into_inner(),
        vec![
            ("alpha.ttl".to_string(), true),
            ("broken.ttl".to_string(), false),
            ("gamma.ttl".to_string(), true),
        ]
    );

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.input.file_name, "broken.ttl");
    assert!(failure.error.as_deref().unwrap().contains("cannot render broken"));

    assert_eq!(
        ws.out_listing(),
        vec!["alpha.html", "alpha.ttl", "gamma.html", "gamma.ttl", "index.html"]
    );
}

#[test]
fn index_lists_failed_inputs_too() {
    let ws = Workspace::with_files(&[("alpha.ttl", "a"), ("broken_one.ttl", "b")]);

    let report = generate(&ws.config, &stand_in).unwrap();

    assert_eq!(report.failure_count(), 1);
    let index = fs::read_to_string(ws.out("index.html")).unwrap();
    assert_eq!(index.matches("<li>").count(), 2);
    assert!(index.contains("<a href=\"broken_one.html\">Broken One</a>"));
}

#[test]
fn no_inputs_is_fatal_and_writes_nothing() {
    let ws = Workspace::with_files(&[("README.md", "not an ontology")]);

    let err = generate(&ws.config, &stand_in).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DocsError>(),
        Some(DocsError::NoInputs { .. })
    ));
    assert!(!ws.config.out_dir.exists());
}

#[test]
fn index_can_be_disabled() {
    let mut ws = Workspace::with_files(&[("alpha.ttl", "a")]);
    ws.config.index = false;

    let report = generate(&ws.config, &stand_in).unwrap();

    assert!(report.index.is_none());
    assert_eq!(ws.out_listing(), vec!["alpha.html", "alpha.ttl"]);
}

#[test]
fn copies_are_byte_identical() {
    let content = "@prefix ex: <http://example.org/> .\n# ünïcode comment\n";
    let ws = Workspace::with_files(&[("alpha.ttl", content)]);

    generate(&ws.config, &stand_in).unwrap();

    let original = fs::read(ws.config.source_dir.join("alpha.ttl")).unwrap();
    assert_eq!(fs::read(ws.out("alpha.ttl")).unwrap(), original);
}

#[test]
fn real_renderer_handles_valid_and_invalid_turtle() {
    let ws = Workspace::with_files(&[
        (
            "alpha.ttl",
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             <http://example.org/alpha> a owl:Ontology ; rdfs:label \"Alpha Vocabulary\" .\n\
             <http://example.org/alpha#Thing> a owl:Class .\n",
        ),
        ("broken.ttl", "this is not turtle"),
    ]);

    let report = generate(&ws.config, &OntPub::new()).unwrap();

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
    let page = fs::read_to_string(ws.out("alpha.html")).unwrap();
    assert!(page.contains("Alpha Vocabulary"));
    assert!(!ws.out("broken.html").exists());
    assert!(!ws.out("broken.ttl").exists());
    let error = report.failures().next().unwrap().error.clone().unwrap();
    assert!(error.contains("broken.ttl"), "{}", error);
}
