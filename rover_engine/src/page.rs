use crate::config::ElementIds;
use crate::error::{Result, RoverError};
use std::collections::{BTreeSet, HashMap};

/// The host surface the rover is rendered onto.
///
/// Elements are addressed by identifier. The engine only reads and writes
/// their text, creates and clears children, and toggles style classes.
pub trait Page {
    fn contains(&self, id: &str) -> bool;

    fn text(&self, id: &str) -> Result<&str>;

    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;

    /// Identifiers of the element's children in insertion order.
    fn children(&self, id: &str) -> Result<&[String]>;

    /// Removes every descendant of the element.
    fn clear_children(&mut self, id: &str) -> Result<()>;

    /// Creates `id` as the last child of `parent`, carrying `class`.
    fn append_child(&mut self, parent: &str, id: &str, class: &str) -> Result<()>;

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Returns `false` when there is no element `id`.
    fn add_class(&mut self, id: &str, class: &str) -> bool;

    /// Returns `false` when there is no element `id`.
    fn remove_class(&mut self, id: &str, class: &str) -> bool;

    /// Identifiers of all elements carrying `class`, sorted.
    fn with_class(&self, class: &str) -> Vec<String>;
}

#[derive(Clone, Debug, Default)]
struct Element {
    text: String,
    classes: BTreeSet<String>,
    children: Vec<String>,
}

/// An in-memory page.
#[derive(Clone, Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    // Class name to the elements carrying it, so class queries never scan the page
    class_index: HashMap<String, BTreeSet<String>>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Creates a page holding one empty top-level element per identifier.
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<Document> {
        let mut document = Document::new();
        for id in ids {
            document.insert(id)?;
        }
        Ok(document)
    }

    /// Creates the standard mission control page.
    pub fn mission_control() -> Document {
        let mut document = Document::new();
        for id in ElementIds::default().all() {
            document.elements.insert(id.to_string(), Element::default());
        }
        document
    }

    /// Adds an empty top-level element.
    pub fn insert(&mut self, id: &str) -> Result<()> {
        if self.elements.contains_key(id) {
            return Err(RoverError::DuplicateElement(id.to_string()));
        }
        self.elements.insert(id.to_string(), Element::default());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element(&self, id: &str) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| RoverError::MissingElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| RoverError::MissingElement(id.to_string()))
    }

    fn remove_subtree(&mut self, id: &str) {
        if let Some(element) = self.elements.remove(id) {
            for class in &element.classes {
                if let Some(ids) = self.class_index.get_mut(class) {
                    ids.remove(id);
                }
            }
            for child in &element.children {
                self.remove_subtree(child);
            }
        }
    }
}

impl Page for Document {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn text(&self, id: &str) -> Result<&str> {
        self.element(id).map(|element| element.text.as_str())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.element_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn children(&self, id: &str) -> Result<&[String]> {
        self.element(id).map(|element| element.children.as_slice())
    }

    fn clear_children(&mut self, id: &str) -> Result<()> {
        let children = std::mem::take(&mut self.element_mut(id)?.children);
        for child in &children {
            self.remove_subtree(child);
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &str, id: &str, class: &str) -> Result<()> {
        if self.elements.contains_key(id) {
            return Err(RoverError::DuplicateElement(id.to_string()));
        }
        self.element_mut(parent)?.children.push(id.to_string());
        self.elements.insert(id.to_string(), Element::default());
        self.add_class(id, class);
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        element.classes.insert(class.to_string());
        self.class_index
            .entry(class.to_string())
            .or_default()
            .insert(id.to_string());
        true
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        element.classes.remove(class);
        if let Some(ids) = self.class_index.get_mut(class) {
            ids.remove(id);
        }
        true
    }

    fn with_class(&self, class: &str) -> Vec<String> {
        self.class_index
            .get(class)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }
}
