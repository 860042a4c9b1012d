//! Composite document: an ordered list of elements rendered left to right.

pub trait DocumentElement {
    fn render(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    text: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentElement for TextElement {
    fn render(&self) -> String {
        self.text.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    path: String,
}

impl ImageElement {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentElement for ImageElement {
    fn render(&self) -> String {
        format!("[Image:{}]", self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLineElement;

impl DocumentElement for NewLineElement {
    fn render(&self) -> String {
        "\n".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpaceElement;

impl DocumentElement for TabSpaceElement {
    fn render(&self) -> String {
        "\t".to_string()
    }
}

#[derive(Default)]
pub struct Document {
    elements: Vec<Box<dyn DocumentElement>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: impl DocumentElement + 'static) {
        self.elements.push(Box::new(element));
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn render(&self) -> String {
        self.elements.iter().map(|e| e.render()).collect()
    }
}
