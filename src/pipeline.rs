// src/pipeline.rs
use std::borrow::Cow;

use crate::{
    context::Context,
    stage::{Stage, StageError},
};

/// Runs stages in order with the `needs_apply` skip fast path.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            if !stage.needs_apply(&current, ctx)? {
                continue;
            }
            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}
