//! Single-open accordion for the FAQ list.

use crate::error::{SiteError, SiteResult};

/// A fixed list of items of which at most one is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All items start closed
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Index of the open item, if any
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Click on item `index`: close every other item and flip this one.
    ///
    /// Returns whether `index` is now open.
    pub fn toggle(&mut self, index: usize) -> SiteResult<bool> {
        if index >= self.len {
            return Err(SiteError::AccordionOutOfRange {
                index,
                len: self.len,
            });
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.open.is_some())
    }

    /// Class list for item `index`
    pub fn item_class(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "faq-item active"
        } else {
            "faq-item"
        }
    }
}
