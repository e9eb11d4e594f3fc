//! # Circuit: Ordered Bootstrap Steps
//!
//! A circuit wires modules in sequence and runs them inside one failure
//! boundary. The first failing module stops the circuit; later modules never
//! run. The boundary does not distinguish which step failed beyond logging
//! its label.

use crate::module::{Module, ModuleResult, StepMetadata};
use crate::page::Page;

pub struct Circuit {
    pub name: String,
    pub description: Option<String>,
    pub modules: Vec<Box<dyn Module>>,
}

impl Circuit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            modules: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn wire<M: Module + 'static>(mut self, module: M) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn labels(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.metadata().label).collect()
    }
}

impl Module for Circuit {
    fn metadata(&self) -> StepMetadata {
        StepMetadata {
            label: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        for module in &self.modules {
            let meta = module.metadata();
            tracing::debug!(circuit = %self.name, step = %meta.label, "Running step");
            if let Err(error) = module.execute(page) {
                tracing::debug!(circuit = %self.name, step = %meta.label, %error, "Step failed");
                return Err(error);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{FnModule, ModuleError};
    use folio_core::{ContentStore, SiteConfig};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(
        trail: Rc<RefCell<Vec<&'static str>>>,
        label: &'static str,
        fail: bool,
    ) -> FnModule<impl Fn(&mut Page) -> anyhow::Result<()>> {
        FnModule::new(label, move |_page: &mut Page| {
            trail.borrow_mut().push(label);
            if fail {
                anyhow::bail!("{label} failed");
            }
            Ok(())
        })
    }

    #[test]
    fn test_first_failure_stops_the_circuit() {
        let trail = Rc::new(RefCell::new(Vec::new()));
        let circuit = Circuit::new("test")
            .wire(recorder(trail.clone(), "a", false))
            .wire(recorder(trail.clone(), "b", true))
            .wire(recorder(trail.clone(), "c", false));
        assert_eq!(circuit.labels(), vec!["a", "b", "c"]);

        let mut page = Page::new(ContentStore::builtin(), SiteConfig::default());
        let err = circuit.execute(&mut page).unwrap_err();

        assert!(matches!(err, ModuleError::Other(_)));
        assert_eq!(err.to_string(), "b failed");
        assert_eq!(*trail.borrow(), vec!["a", "b"]);
    }
}
