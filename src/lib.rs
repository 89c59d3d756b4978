//! Modal overlays for scene graphs.
//!
//! # Conceptual overview
//! A modal is a component that covers the whole viewport with a dimmed backdrop and shows some
//! content in a centered box on top of it.
//!
//! ## Graphs
//! A [`Graph`] is a tree of primitives (rectangles, rounded rectangles, groups, and component
//! instances). Nodes may be given a string identifier with the `id` style, and can then be
//! looked up or deleted by that name. Styles are open-ended maps: primitives understand a few
//! keys and ignore the rest, which lets parents hand things like a theme down to their
//! children.
//!
//! ## Opening and dismissing
//! [`modal::open`] adds a component instance named `modal` to a parent graph; it does not build
//! anything yet. A [`Host`] then finds that instance, validates its content, queries the
//! viewport once, and assembles the modal graph. [`modal::dismiss`] deletes the instance again.
//! Opening a modal while one is already open replaces it.
//!
//! ## Sizes
//! Content sizes are [`Dimension`]s: values below 1 are fractions of the viewport, values of 1
//! or more are pixels. Either way, the content box is centered.
//!
//! ## Events
//! Raw input is addressed to whatever primitive is under the pointer. The modal only reacts to
//! a pointer release on its backdrop, which it reports to the parent as a dismiss click.
//! Events emitted by the content filter up through the modal, which wraps them in
//! [`Event::Modal`] before handing them to the parent and stops the original.
//!
//! ## Coordinate System
//! The origin is at the top left corner of the viewport, and positive y points down.

pub mod color;
pub mod config;
pub mod content;
pub mod dimension;
pub mod error;
pub mod events;
mod graph;
mod host;
pub mod modal;
mod primitive;
mod rect;
pub mod style;
pub mod viewport;

pub use content::{Component, ContentSpec, SpecValue};
pub use dimension::{Dimension, Size};
pub use events::{Event, Filter, Input, InputContext};
pub use graph::{Graph, GroupBuilder, Node, NodeId};
pub use host::{Host, Message};
pub use modal::{Modal, ModalOptions, ModalState};
pub use primitive::{ComponentNode, Primitive, Props};
pub use rect::Rect;
pub use style::{StyleValue, Styles};
