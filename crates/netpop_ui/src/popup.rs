//! The annotation popup.
//!
//! A [`Popup`] owns one surface attached to its container and keeps the
//! anchor point, the direction hint and the visibility flag. Nothing is
//! redrawn until [`Popup::show`] runs; each show measures the live surface
//! and its container, clamps, and applies the result.
//!
//! States: `Hidden` (initial) and `Visible`. Showing a visible popup
//! re-applies the position; hiding a hidden one changes nothing.

use crate::config::PopupConfig;
use crate::coordinate::{Axis, Coordinate};
use crate::direction::Direction;
use crate::error::{PopupError, PopupResult};
use crate::layout::Point;
use crate::placement::{compute_placement, Placement};
use crate::surface::{
    Container, GraphElement, PopupContent, Surface, Visibility, DIRECTION_ATTRIBUTE,
    GRAPH_ID_ATTRIBUTE,
};

/// A floating annotation kept inside its container.
#[derive(Debug)]
pub struct Popup<S: Surface> {
    /// The owned visual surface.
    surface: S,
    /// Point the popup appears near.
    anchor: Point,
    /// Gap to the container edges. Fixed at construction.
    padding: i32,
    /// Stylesheet class the surface was tagged with.
    class_name: String,
    /// True until the first show and after every hide.
    hidden: bool,
    /// Last direction written to the surface. `None` before first use.
    direction: Option<Direction>,
    /// Result of the last show.
    placement: Option<Placement>,
}

impl<S: Surface> Popup<S> {
    /// Creates a popup attached to `container` with the default config.
    #[must_use]
    pub fn new<C>(container: &mut C) -> Self
    where
        C: Container<Surface = S>,
    {
        let config = PopupConfig::default();
        Self::attach(container, config.padding, config.class_name)
    }

    /// Creates a popup attached to `container`.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::InvalidConfig`] if the config does not validate.
    /// Nothing is attached in that case.
    pub fn with_config<C>(container: &mut C, config: &PopupConfig) -> PopupResult<Self>
    where
        C: Container<Surface = S>,
    {
        config.validate()?;
        Ok(Self::attach(
            container,
            config.padding,
            config.class_name.clone(),
        ))
    }

    fn attach<C>(container: &mut C, padding: i32, class_name: String) -> Self
    where
        C: Container<Surface = S>,
    {
        let mut surface = container.attach_child();
        surface.set_class_name(&class_name);
        surface.set_visibility(Visibility::Hidden);

        Self {
            surface,
            anchor: Point::ORIGIN,
            padding,
            class_name,
            hidden: true,
            direction: None,
            placement: None,
        }
    }

    /// Stores the anchor point for the next show.
    ///
    /// Values are coerced to integer pixels (see [`Coordinate`]). Both are
    /// checked before either is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::NonNumericCoordinate`] for input with no
    /// numeric value. The previous anchor is kept.
    pub fn set_position<X, Y>(&mut self, x: X, y: Y) -> PopupResult<()>
    where
        X: Coordinate,
        Y: Coordinate,
    {
        let x = coerce(Axis::X, &x)?;
        let y = coerce(Axis::Y, &y)?;
        self.anchor = Point::new(x, y);
        Ok(())
    }

    /// Stores an already-integral anchor point.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Records the direction hint, writing the surface attribute only when
    /// it changes.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction == Some(direction) {
            return;
        }
        tracing::trace!(direction = direction.as_attr(), "popup direction changed");
        self.surface.set_attribute(DIRECTION_ATTRIBUTE, direction.as_attr());
        self.direction = Some(direction);
    }

    /// Replaces the displayed content entirely.
    ///
    /// String content is trusted markup and is inserted unescaped; pass
    /// untrusted text through [`crate::escape_markup`] first.
    pub fn set_text(&mut self, content: impl Into<PopupContent<S::Node>>) {
        match content.into() {
            PopupContent::Node(node) => self.surface.replace_children(node),
            PopupContent::Markup(markup) => self.surface.set_inner_markup(&markup),
        }
    }

    /// Shows the popup at the stored anchor.
    pub fn show(&mut self) {
        self.show_with::<str>(true, None);
    }

    /// Shows the popup and tags it with the annotated element's id.
    pub fn show_for<G>(&mut self, element: &G)
    where
        G: GraphElement + ?Sized,
    {
        self.show_with(true, Some(element));
    }

    /// Shows (or, with `do_show == false`, hides) the popup.
    ///
    /// Content must already be set: the popup measures the live surface.
    pub fn show_with<G>(&mut self, do_show: bool, element: Option<&G>)
    where
        G: GraphElement + ?Sized,
    {
        if !do_show {
            self.hide();
            return;
        }

        let size = self.surface.client_size();
        let bounds = self.surface.parent_client_size();
        if size.is_empty() {
            tracing::debug!(
                width = size.width,
                height = size.height,
                "popup shown with an empty surface, set content first"
            );
        }
        let placement = compute_placement(self.anchor, size, bounds, self.padding);

        if placement.horizontally_clamped() {
            tracing::debug!(
                anchor_x = self.anchor.x,
                left = placement.left,
                width = size.width,
                max_width = bounds.width,
                "popup clamped horizontally, direction suppressed"
            );
        }
        if placement.vertically_clamped() {
            tracing::debug!(
                anchor_y = self.anchor.y,
                top = placement.top,
                height = size.height,
                max_height = bounds.height,
                "popup clamped vertically"
            );
        }

        if let Some(direction) = placement.resolve_direction(self.direction) {
            self.set_direction(direction);
        }

        if let Some(element) = element {
            self.surface
                .set_attribute(GRAPH_ID_ATTRIBUTE, &element.graph_id());
        }

        self.surface.set_offset(placement.left, placement.top);
        self.surface.set_visibility(Visibility::Visible);
        self.hidden = false;
        self.placement = Some(placement);

        tracing::trace!(left = placement.left, top = placement.top, "popup shown");
    }

    /// Hides the popup, keeping content, anchor and direction.
    pub fn hide(&mut self) {
        self.hidden = true;
        self.surface.set_visibility(Visibility::Hidden);
        tracing::trace!("popup hidden");
    }

    /// Returns the stored anchor point.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the edge padding.
    #[must_use]
    pub const fn padding(&self) -> i32 {
        self.padding
    }

    /// Returns the stylesheet class of the surface.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns true while the popup is hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the last applied direction, `None` before first use.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the placement computed by the last show.
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Returns the surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably, for host-side measurement overrides.
    ///
    /// Writing popup state (attributes, offset, visibility) through it
    /// bypasses the popup's bookkeeping.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn coerce<C: Coordinate>(axis: Axis, value: &C) -> PopupResult<i32> {
    value.to_pixel().ok_or_else(|| {
        tracing::warn!(%axis, input = %value, "rejected non-numeric popup coordinate");
        PopupError::NonNumericCoordinate {
            axis,
            input: value.to_string(),
        }
    })
}
