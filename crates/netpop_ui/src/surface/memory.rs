//! Headless surface.
//!
//! Keeps everything a real surface would render as plain state and records
//! every attribute write, so popups can be laid out without a renderer (for
//! snapshot exports, server-side previews and tests).
//!
//! Without an explicit size, a surface measures its content the way a
//! monospace tooltip box would: 8px per character, 16px per line, 5px of
//! inner padding on every side. Empty content measures as zero.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Container, Surface, Visibility};
use crate::layout::{Point, Size};

const CHAR_WIDTH: i32 = 8;
const LINE_HEIGHT: i32 = 16;
const BOX_PADDING: i32 = 5;

/// State shared between a container and the surfaces attached to it.
#[derive(Debug)]
struct ContainerState {
    size: Size,
    children: usize,
}

/// A headless container of a fixed, resizable client size.
#[derive(Debug, Clone)]
pub struct MemoryContainer {
    state: Arc<RwLock<ContainerState>>,
}

impl MemoryContainer {
    /// Creates a container with the given client size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            state: Arc::new(RwLock::new(ContainerState { size, children: 0 })),
        }
    }

    /// Resizes the container. Attached surfaces see the new size on their
    /// next measurement.
    pub fn resize(&self, size: Size) {
        self.state.write().size = size;
    }

    /// Returns the current client size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.state.read().size
    }

    /// Returns the number of surfaces attached so far.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.state.read().children
    }
}

impl Container for MemoryContainer {
    type Surface = MemorySurface;

    fn attach_child(&mut self) -> MemorySurface {
        self.state.write().children += 1;
        MemorySurface::new(Arc::clone(&self.state))
    }
}

/// A pre-built content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNode {
    tag: String,
    text: String,
}

impl MemoryNode {
    /// Creates an element node holding plain text.
    #[must_use]
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }

    /// Returns the element tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the text inside the node.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Serializes the node as markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!("<{tag}>{text}</{tag}>", tag = self.tag, text = self.text)
    }
}

/// What a headless surface currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MemoryContent {
    /// Nothing set yet.
    #[default]
    Empty,
    /// Raw markup.
    Markup(String),
    /// A single child node.
    Node(MemoryNode),
}

impl MemoryContent {
    /// Returns the content serialized as markup (`innerHTML`).
    #[must_use]
    pub fn inner_markup(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Markup(markup) => markup.clone(),
            Self::Node(node) => node.to_markup(),
        }
    }

    /// Returns the text a reader would see, with tags stripped and `<br>`
    /// turned into line breaks.
    #[must_use]
    pub fn visible_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Markup(markup) => strip_tags(markup),
            Self::Node(node) => node.text().to_string(),
        }
    }

    fn measure(&self) -> Size {
        let text = self.visible_text();
        if text.is_empty() {
            return Size::ZERO;
        }

        let columns = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let rows = text.lines().count().max(1);

        Size::new(
            to_px(columns).saturating_mul(CHAR_WIDTH) + BOX_PADDING * 2,
            to_px(rows).saturating_mul(LINE_HEIGHT) + BOX_PADDING * 2,
        )
    }
}

fn to_px(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

fn strip_tags(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            rest = &rest[open..];
            break;
        };
        let tag = rest[open + 1..open + close].trim_end_matches('/').trim();
        if tag.eq_ignore_ascii_case("br") {
            text.push('\n');
        }
        rest = &rest[open + close + 1..];
    }

    text.push_str(rest);
    text
}

/// A headless popup surface.
#[derive(Debug)]
pub struct MemorySurface {
    container: Arc<RwLock<ContainerState>>,
    class_name: String,
    attributes: HashMap<String, String>,
    writes: Vec<(String, String)>,
    content: MemoryContent,
    fixed_size: Option<Size>,
    offset: Option<Point>,
    visibility: Option<Visibility>,
}

impl MemorySurface {
    fn new(container: Arc<RwLock<ContainerState>>) -> Self {
        Self {
            container,
            class_name: String::new(),
            attributes: HashMap::new(),
            writes: Vec::new(),
            content: MemoryContent::Empty,
            fixed_size: None,
            offset: None,
            visibility: None,
        }
    }

    /// Forces the measured size, as a host layout engine would report it.
    pub fn set_client_size(&mut self, size: Size) {
        self.fixed_size = Some(size);
    }

    /// Goes back to measuring the content.
    pub fn clear_client_size(&mut self) {
        self.fixed_size = None;
    }

    /// Returns the stylesheet class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the current content.
    #[must_use]
    pub fn content(&self) -> &MemoryContent {
        &self.content
    }

    /// Returns the applied `left`/`top` offset, if any.
    #[must_use]
    pub fn offset(&self) -> Option<Point> {
        self.offset
    }

    /// Returns the applied visibility, if any.
    #[must_use]
    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    /// Returns an inline style value in CSS form (`left: "65px"`).
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        match property {
            "left" => self.offset.map(|p| format!("{}px", p.x)),
            "top" => self.offset.map(|p| format!("{}px", p.y)),
            "visibility" => self.visibility.map(|v| v.as_css().to_string()),
            _ => None,
        }
    }

    /// Returns how many times the attribute has been written since the
    /// log was last drained.
    #[must_use]
    pub fn attribute_writes(&self, name: &str) -> usize {
        self.writes.iter().filter(|(written, _)| written == name).count()
    }

    /// Returns every attribute write, oldest first.
    #[must_use]
    pub fn write_log(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Drains the write log. Long-lived hosts call this once per frame or
    /// export, the log otherwise grows with every write.
    pub fn take_write_log(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.writes)
    }
}

impl Surface for MemorySurface {
    type Node = MemoryNode;

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = class_name.to_string();
    }

    fn client_size(&self) -> Size {
        self.fixed_size.unwrap_or_else(|| self.content.measure())
    }

    fn parent_client_size(&self) -> Size {
        self.container.read().size
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_inner_markup(&mut self, markup: &str) {
        self.content = MemoryContent::Markup(markup.to_string());
    }

    fn replace_children(&mut self, node: MemoryNode) {
        self.content = MemoryContent::Node(node);
    }

    fn set_offset(&mut self, left: i32, top: i32) {
        self.offset = Some(Point::new(left, top));
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
    }
}
