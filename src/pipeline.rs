use std::time::Instant;

use tracing::info;

use crate::errors::{InterRefsError, Result};
use crate::types::Corpus;

/// A step of the site build that runs once content is final.
///
/// Stages run after every document has been rendered and post-processed, and
/// before templates are rendered.
pub trait BuildStage<D> {
    /// Unique name of the stage within a pipeline.
    fn name(&self) -> &str;

    /// Runs the stage over the whole finalized corpus.
    fn run(&self, corpus: &mut Corpus<D>) -> Result<()>;
}

/// Ordered list of stages invoked once per build.
pub struct Pipeline<D> {
    stages: Vec<Box<dyn BuildStage<D>>>,
}

impl<D> Pipeline<D> {
    /// Creates a pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage. Stage names must be unique.
    pub fn register(&mut self, stage: Box<dyn BuildStage<D>>) -> Result<()> {
        if self.stages.iter().any(|s| s.name() == stage.name()) {
            return Err(InterRefsError::Stage {
                message: "a stage with this name is already registered".to_string(),
                stage: stage.name().to_string(),
            });
        }
        self.stages.push(stage);
        Ok(())
    }

    /// Names of the registered stages, in run order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs every stage once, in registration order.
    ///
    /// Fails without running anything if the corpus is not finalized, and
    /// stops at the first failing stage.
    pub fn run(&self, corpus: &mut Corpus<D>) -> Result<()> {
        if !corpus.is_finalized() {
            return Err(InterRefsError::NotFinalized);
        }
        for stage in &self.stages {
            let start = Instant::now();
            stage.run(corpus)?;
            info!(
                stage = stage.name(),
                duration_ms = start.elapsed().as_millis() as u64,
                "stage complete"
            );
        }
        Ok(())
    }
}

impl<D> Default for Pipeline<D> {
    fn default() -> Self {
        Self::new()
    }
}
