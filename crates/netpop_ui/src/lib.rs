//! # NETPOP UI
//!
//! Annotation popups for graph-drawing surfaces:
//! - Anchored above a node or edge position
//! - Clamped against the container edges, minus padding
//! - Left/right direction hints, dropped when a clamp breaks them
//! - Headless geometry, rendering surface behind a trait
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     POPUP PIPELINE                      │
//! ├────────────────────────────────────────────────────────┤
//! │  set_position / set_text → show → measure → clamp      │
//! │         ↓                     ↓        ↓        ↓      │
//! │     Coordinate            Surface   Size   Placement   │
//! │                                                ↓       │
//! │                     direction · offset · visibility    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use netpop_ui::{MemoryContainer, Popup, Size};
//!
//! let mut container = MemoryContainer::new(Size::new(100, 100));
//! let mut popup = Popup::new(&mut container);
//!
//! popup.set_text("Node 7");
//! popup.surface_mut().set_client_size(Size::new(30, 20));
//! popup.set_position(95, 50)?;
//! popup.show_for("node-7");
//!
//! assert_eq!(popup.surface().style("left").as_deref(), Some("65px"));
//! # Ok::<(), netpop_ui::PopupError>(())
//! ```
//!
//! ## Coordinate space
//!
//! The container and the popup surface are measured in the same pixel units,
//! and the popup's `left`/`top` are offsets from the container's own origin.
//! Hosts with a transformed canvas convert to container pixels before calling
//! [`Popup::set_position`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod coordinate;
pub mod direction;
pub mod error;
pub mod layout;
pub mod placement;
pub mod popup;
pub mod surface;

pub use config::{PopupConfig, DEFAULT_PADDING};
pub use coordinate::{Axis, Coordinate};
pub use direction::Direction;
pub use error::{PopupError, PopupResult};
pub use layout::{Point, Rect, Size};
pub use placement::{compute_placement, Placement};
pub use popup::Popup;
pub use surface::{
    escape_markup, Container, GraphElement, MemoryContainer, MemoryContent, MemoryNode,
    MemorySurface, PopupContent, Surface, Visibility,
};
