//! The editor wires a document to a storage backend and memoizes the render.

use tracing::debug;

use crate::document::{Document, DocumentElement, ImageElement, NewLineElement, TabSpaceElement, TextElement};
use crate::error::StorageError;
use crate::storage::Persistence;

pub struct DocumentEditor<P: Persistence> {
    document: Document,
    storage: P,
    rendered: Option<String>,
    render_count: usize,
}

impl<P: Persistence> DocumentEditor<P> {
    pub fn new(document: Document, storage: P) -> Self {
        Self {
            document,
            storage,
            rendered: None,
            render_count: 0,
        }
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.add_element(TextElement::new(text));
    }

    pub fn add_image(&mut self, path: impl Into<String>) {
        self.add_element(ImageElement::new(path));
    }

    pub fn add_new_line(&mut self) {
        self.add_element(NewLineElement);
    }

    pub fn add_tab_space(&mut self) {
        self.add_element(TabSpaceElement);
    }

    /// Appends any element. Invalidates the cached render.
    pub fn add_element(&mut self, element: impl DocumentElement + 'static) {
        self.document.add_element(element);
        self.rendered = None;
    }

    /// Renders on first call, then serves the cached text until the next append.
    pub fn render_document(&mut self) -> &str {
        if self.rendered.is_none() {
            self.render_count += 1;
            debug!(elements = self.document.len(), "rendering document");
        }
        let document = &self.document;
        self.rendered.get_or_insert_with(|| document.render())
    }

    /// Number of times the document was actually rendered.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn save(&mut self) -> Result<(), StorageError> {
        self.render_document();
        let data = self.rendered.as_deref().unwrap_or_default();
        self.storage.save(data)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn storage(&self) -> &P {
        &self.storage
    }
}
