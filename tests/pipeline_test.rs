use std::cell::Cell;
use std::rc::Rc;

use interrefs::config::InterRefsConfig;
use interrefs::errors::{InterRefsError, Result};
use interrefs::interrefs::{register, STAGE_NAME};
use interrefs::pipeline::{BuildStage, Pipeline};
use interrefs::types::*;

/// Stage that counts its invocations.
struct CountingStage {
    name: &'static str,
    calls: Rc<Cell<usize>>,
}

impl BuildStage<Article> for CountingStage {
    fn name(&self) -> &str {
        self.name
    }

    fn run(&self, _corpus: &mut Corpus<Article>) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Stage that always fails.
struct FailingStage;

impl BuildStage<Article> for FailingStage {
    fn name(&self) -> &str {
        "failing"
    }

    fn run(&self, _corpus: &mut Corpus<Article>) -> Result<()> {
        Err(InterRefsError::Stage {
            message: "rendering failed".to_string(),
            stage: "failing".to_string(),
        })
    }
}

fn finalized_corpus() -> Corpus {
    let mut corpus = Corpus::new(
        vec![
            Article::new("/a/", "a", r#"<a href="/b/">b</a>"#),
            Article::new("/b/", "b", ""),
        ],
        Vec::new(),
    );
    corpus.finalize();
    corpus
}

#[test]
fn test_registered_pass_attaches_references() {
    let mut pipeline: Pipeline<Article> = Pipeline::new();
    register(&mut pipeline, InterRefsConfig::default()).unwrap();
    assert_eq!(pipeline.stage_names(), vec![STAGE_NAME]);

    let mut corpus = finalized_corpus();
    pipeline.run(&mut corpus).unwrap();

    assert_eq!(corpus.get("/a/").unwrap().interrefs.forward, vec!["/b/".to_string()]);
    assert_eq!(corpus.get("/b/").unwrap().interrefs.backward, vec!["/a/".to_string()]);
}

#[test]
fn test_pipeline_refuses_unfinalized_corpus() {
    let calls = Rc::new(Cell::new(0));
    let mut pipeline: Pipeline<Article> = Pipeline::new();
    pipeline
        .register(Box::new(CountingStage {
            name: "count",
            calls: Rc::clone(&calls),
        }))
        .unwrap();

    let mut corpus = Corpus::new(vec![Article::new("/a/", "a", "")], Vec::new());
    let err = pipeline.run(&mut corpus).unwrap_err();
    assert!(matches!(err, InterRefsError::NotFinalized));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_each_stage_runs_once_per_build() {
    let calls = Rc::new(Cell::new(0));
    let mut pipeline: Pipeline<Article> = Pipeline::new();
    pipeline
        .register(Box::new(CountingStage {
            name: "count",
            calls: Rc::clone(&calls),
        }))
        .unwrap();
    register(&mut pipeline, InterRefsConfig::default()).unwrap();

    let mut corpus = finalized_corpus();
    pipeline.run(&mut corpus).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(pipeline.stage_names(), vec!["count", STAGE_NAME]);
}

#[test]
fn test_duplicate_stage_names_rejected() {
    let mut pipeline: Pipeline<Article> = Pipeline::new();
    register(&mut pipeline, InterRefsConfig::default()).unwrap();
    let err = register(&mut pipeline, InterRefsConfig::default()).unwrap_err();
    assert!(matches!(err, InterRefsError::Stage { .. }));
}

#[test]
fn test_failing_stage_stops_the_build() {
    let mut pipeline: Pipeline<Article> = Pipeline::new();
    pipeline.register(Box::new(FailingStage)).unwrap();
    register(&mut pipeline, InterRefsConfig::default()).unwrap();

    let mut corpus = finalized_corpus();
    let err = pipeline.run(&mut corpus).unwrap_err();
    assert!(matches!(err, InterRefsError::Stage { .. }));
    assert!(corpus.iter().all(|a| !a.interrefs.has_references()));
}
