//! Mock DOM for the calculator widget
//!
//! A small element tree that stands in for the browser document, so the
//! widget's markup and event wiring can be checked without web-sys.

use crate::config::CalculatorConfig;
use crate::core::{OperandSlot, Operation, RESULT_FIELD_NAME};

/// Tags rendered without a closing tag
const VOID_TAGS: [&str; 3] = ["input", "br", "img"];

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Sets an attribute, keeping its original position when it exists
    pub fn set_attr(&mut self, key: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((key.to_string(), value.to_string())),
        }
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Checks for an attribute regardless of its value
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.get_attr(key).is_some()
    }

    /// The `name` attribute
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get_attr("name")
    }

    /// The `value` attribute, empty when unset
    #[must_use]
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }

    /// Renders the element and its children as HTML
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.id.is_empty() {
            push_attr(out, "id", &self.id);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        for (key, value) in &self.attributes {
            push_attr(out, key, value);
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        out.push_str(&escape(&self.text_content));
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a DomElement>) {
        out.push(self);
        for child in &self.children {
            child.walk(out);
        }
    }

    fn find_mut(&mut self, pred: &dyn Fn(&DomElement) -> bool) -> Option<&mut DomElement> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(pred))
    }
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// DOM events the widget responds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Value edit on a named input
    Change {
        /// The `name` of the input
        name: String,
        /// The new value
        value: String,
    },
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a change event
    #[must_use]
    pub fn change(name: &str, value: &str) -> Self {
        Self::Change {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Element ID of the trigger button for an operation
#[must_use]
pub fn button_id(op: Operation) -> String {
    format!("btn-{}", op.id())
}

/// Operation for a trigger button ID
#[must_use]
pub fn operation_for_button(element_id: &str) -> Option<Operation> {
    element_id.strip_prefix("btn-")?.parse().ok()
}

/// Mock document holding the widget's element tree
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
        }
    }

    /// Creates the calculator markup with default prompts
    #[must_use]
    pub fn calculator() -> Self {
        Self::calculator_with(&CalculatorConfig::default())
    }

    /// Creates the calculator markup:
    /// both operand inputs, the read-only result and seven buttons in order
    #[must_use]
    pub fn calculator_with(config: &CalculatorConfig) -> Self {
        let mut root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator");

        for slot in OperandSlot::ALL {
            root = root.with_child(
                DomElement::new("input")
                    .with_attr("placeholder", config.placeholder(slot))
                    .with_attr("name", slot.field_name()),
            );
        }
        root = root.with_child(
            DomElement::new("input")
                .with_attr("readonly", "")
                .with_attr("name", RESULT_FIELD_NAME),
        );
        for op in Operation::ALL {
            root = root.with_child(
                DomElement::new("button")
                    .with_id(&button_id(op))
                    .with_text(op.label()),
            );
        }

        Self { root }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.all_elements().into_iter().find(|e| e.id == id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.root.find_mut(&|e| e.id == id)
    }

    /// Gets the first element with a `name` attribute
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&DomElement> {
        self.all_elements()
            .into_iter()
            .find(|e| e.name() == Some(name))
    }

    /// Gets a mutable element by `name`
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut DomElement> {
        self.root.find_mut(&|e| e.name() == Some(name))
    }

    /// All elements with a tag, in document order
    #[must_use]
    pub fn query_all(&self, tag: &str) -> Vec<&DomElement> {
        self.all_elements()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    /// Every element in document order, root first
    #[must_use]
    pub fn all_elements(&self) -> Vec<&DomElement> {
        let mut out = Vec::new();
        self.root.walk(&mut out);
        out
    }

    /// Reads the `value` of a named input
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(DomElement::value)
    }

    /// Writes the `value` of a named input; returns false if there is none
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.find_by_name_mut(name) {
            Some(elem) => {
                elem.set_attr("value", value);
                true
            }
            None => false,
        }
    }

    /// Dispatches an event, applying value edits to the tree.
    ///
    /// Clicks change nothing in the document itself; the widget handles them.
    pub fn dispatch_event(&mut self, event: &DomEvent) {
        if let DomEvent::Change { name, value } = event {
            self.set_value(name, value);
        }
    }

    /// Renders the whole document as HTML
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.root.to_markup()
    }
}
