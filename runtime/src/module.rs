use crate::page::Page;
use thiserror::Error;

pub type ModuleResult = Result<(), ModuleError>;

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("render target `{0}` not found in document")]
    MissingTarget(String),
    #[error("page already unloaded")]
    Unloaded,
    #[error("page already bootstrapped")]
    AlreadyBootstrapped,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMetadata {
    pub label: String,
    pub description: Option<String>,
}

impl StepMetadata {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One initialization step run against the page during bootstrap.
pub trait Module {
    fn metadata(&self) -> StepMetadata;
    fn execute(&self, page: &mut Page) -> ModuleResult;
}

/// A module backed by a closure, for one-off steps.
pub struct FnModule<F> {
    label: String,
    run: F,
}

impl<F> FnModule<F>
where
    F: Fn(&mut Page) -> anyhow::Result<()>,
{
    pub fn new(label: impl Into<String>, run: F) -> Self {
        Self {
            label: label.into(),
            run,
        }
    }
}

impl<F> Module for FnModule<F>
where
    F: Fn(&mut Page) -> anyhow::Result<()>,
{
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new(self.label.clone())
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        (self.run)(page).map_err(ModuleError::from)
    }
}
