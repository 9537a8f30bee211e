use dyn_inventory::prelude::*;
use std::cell::RefCell;

/// Mock OutputPresenter that records everything it is asked to present
#[derive(Default)]
pub struct MockOutputPresenter {
    presented: RefCell<Vec<String>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> Vec<String> {
        self.presented.borrow().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.borrow_mut().push(content.to_string());
        Ok(())
    }
}
