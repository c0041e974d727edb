//! The visual surface contract.
//!
//! A popup never talks to a renderer directly. It owns one [`Surface`], a
//! styleable box created by its [`Container`], and drives it through
//! attribute writes, content replacement and inline `left`/`top`/`visibility`
//! styling. Surfaces measure in the container's pixel space.

mod memory;

pub use memory::{MemoryContainer, MemoryContent, MemoryNode, MemorySurface};

use std::borrow::Cow;

use crate::layout::Size;

/// Attribute holding the direction hint.
pub const DIRECTION_ATTRIBUTE: &str = "direction";

/// Attribute holding the identifier of the annotated graph element.
pub const GRAPH_ID_ATTRIBUTE: &str = "graph-id";

/// Stylesheet class applied to every popup surface.
pub const DEFAULT_CLASS_NAME: &str = "vis-network-tooltip";

/// Inline `visibility` style of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `visibility: visible`
    Visible,
    /// `visibility: hidden`
    Hidden,
}

impl Visibility {
    /// Returns the CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

/// Content displayed by a popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupContent<N> {
    /// Raw markup or text, inserted as-is. Never escaped.
    Markup(String),
    /// A pre-built content node, attached as the surface's only child.
    Node(N),
}

impl<N> PopupContent<N> {
    /// Wraps a pre-built node.
    #[must_use]
    pub const fn node(node: N) -> Self {
        Self::Node(node)
    }
}

impl<N> From<&str> for PopupContent<N> {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }
}

impl<N> From<String> for PopupContent<N> {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

/// A styleable box owned by exactly one popup.
pub trait Surface {
    /// Pre-built content node type accepted by [`Surface::replace_children`].
    type Node;

    /// Sets the stylesheet class.
    fn set_class_name(&mut self, class_name: &str);

    /// Measures the surface's own rendered box.
    fn client_size(&self) -> Size;

    /// Measures the box of the container the surface is attached to.
    fn parent_client_size(&self) -> Size;

    /// Reads an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes an attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Replaces the inner content with raw markup.
    fn set_inner_markup(&mut self, markup: &str);

    /// Clears the inner content and attaches `node` as the only child.
    fn replace_children(&mut self, node: Self::Node);

    /// Applies the inline `left`/`top` offset, in pixels.
    fn set_offset(&mut self, left: i32, top: i32);

    /// Applies the inline `visibility` style.
    fn set_visibility(&mut self, visibility: Visibility);
}

/// A host region able to create and attach a popup surface.
pub trait Container {
    /// Surface type created by this container.
    type Surface: Surface;

    /// Creates a new surface and appends it as a child of this container.
    fn attach_child(&mut self) -> Self::Surface;
}

/// An object a popup can annotate, e.g. a node or edge of the graph.
pub trait GraphElement {
    /// Identifier written to the surface's `graph-id` attribute.
    fn graph_id(&self) -> Cow<'_, str>;
}

impl GraphElement for str {
    fn graph_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl GraphElement for String {
    fn graph_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

macro_rules! numeric_graph_id {
    ($($ty:ty),*) => {
        $(
            impl GraphElement for $ty {
                fn graph_id(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

numeric_graph_id!(u32, u64, i64);

/// Escapes `text` so it displays literally when passed as markup.
///
/// Popup markup is trusted; run untrusted labels through this first.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
