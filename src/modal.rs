//! Modal overlays.
//!
//! A modal covers the whole viewport with a dimmed backdrop and shows its content in a
//! centered, rounded box on top. It is opened by inserting a component instance named
//! [`MODAL`] into a parent graph and closed by deleting that node again.
//!
//! The assembled graph always looks like this:
//!
//! ```text
//! root
//! ├── modal_backdrop        Rect, viewport-sized, dimmed
//! └── content               Group, translated to center the box, pass-through styles
//!     ├── content_background RoundedRect, resolved size, `fill`
//!     └── ...               the embedded content
//! ```
//!
//! Releasing the pointer on the backdrop emits `Modal(Click("dismiss"))` to the parent.
//! Every event the content emits is handed to the parent wrapped in [`Event::Modal`], and
//! never travels further in its original form.

use crate::color::Color;
use crate::content::{self, ContentSpec, SpecValue};
use crate::error::{InvalidSpec, ModalError};
use crate::events::{Event, Filter, Input, InputContext, PointerPhase};
use crate::graph::{Graph, NodeId};
use crate::rect::Rect;
use crate::style::{keys, StyleValue, Styles};
use crate::viewport::Viewport;
use cgmath::{EuclideanSpace, Point2, Vector2};
use crossbeam::channel::Sender;
use std::sync::Arc;

/// Identifier of the modal instance in its parent graph.
pub const MODAL: &str = "modal";

/// Identifier of the full-viewport backdrop.
pub const BACKDROP: &str = "modal_backdrop";

/// Identifier of the group holding the content.
pub const CONTENT: &str = "content";

/// Identifier of the rounded rectangle behind the content.
pub const CONTENT_BACKGROUND: &str = "content_background";

/// Modal looks that aren't controlled through styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Backdrop fill.
    pub backdrop: Color,

    /// Corner radius of the content background.
    pub corner_radius: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            backdrop: Color::BLACK.with_alpha(0.5),
            corner_radius: 4.,
        }
    }
}

/// How to open a modal.
#[derive(Debug, Clone)]
pub struct ModalOptions {
    /// Queried once, when the modal is constructed.
    pub viewport: Arc<dyn Viewport>,

    /// `size` and `fill` are used by the modal; everything else is set on the content group.
    pub styles: Styles,

    pub appearance: Appearance,
}

impl ModalOptions {
    pub fn new<V: Viewport + 'static>(viewport: V) -> ModalOptions {
        ModalOptions {
            viewport: Arc::new(viewport),
            styles: Styles::new(),
            appearance: Appearance::default(),
        }
    }

    pub fn with_styles(mut self, styles: Styles) -> ModalOptions {
        self.styles = styles;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> ModalOptions {
        self.appearance = appearance;
        self
    }
}

/// Properties of a modal instance node.
#[derive(Debug)]
pub struct ModalProps {
    pub spec: SpecValue,
    pub options: ModalOptions,
}

/// Adds a modal instance to the root of a graph.
///
/// Replaces an already open modal. The modal is not constructed until a host starts it.
pub fn open(mut graph: Graph, spec: SpecValue, options: ModalOptions) -> Graph {
    if graph.contains(MODAL) {
        log::debug!("replacing open modal");
    }
    let props = ModalProps { spec, options };
    graph
        .builder()
        .component(MODAL, Arc::new(props), Styles::new().with_id(MODAL));
    graph
}

/// Like [`open`], with an explicit appearance.
pub fn open_with(
    graph: Graph,
    spec: SpecValue,
    options: ModalOptions,
    appearance: Appearance,
) -> Graph {
    open(graph, spec, options.with_appearance(appearance))
}

/// Removes the modal instance from a graph, if there is one.
pub fn dismiss(mut graph: Graph) -> Graph {
    if graph.delete(MODAL) {
        log::debug!("dismissed modal");
    }
    graph
}

/// The assembled modal graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    graph: Graph,
    backdrop: NodeId,
    content_bounds: Rect,
}

impl ModalState {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The content box in viewport coordinates.
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }
}

/// Builds the modal graph for a viewport of the given size.
pub fn assemble(
    spec: &ContentSpec,
    viewport: Vector2<f64>,
    mut styles: Styles,
    appearance: Appearance,
) -> ModalState {
    let size = styles.take_size().unwrap_or_default();
    let fill = styles.fill().unwrap_or(Color::WHITE);

    let box_size = size.resolved_size(viewport);
    let offset = size.resolved_offset(viewport);
    log::debug!(
        "modal content {}x{} at ({}, {}) in {}x{} viewport",
        box_size.x,
        box_size.y,
        offset.x,
        offset.y,
        viewport.x,
        viewport.y
    );

    // pass-through styles may set a translate, but never the id
    let translate = match styles.translate() {
        Some(translate) => translate,
        None => {
            styles.insert(keys::TRANSLATE, offset);
            offset
        }
    };
    styles.insert(keys::ID, StyleValue::Id(CONTENT.to_string()));

    let mut graph = Graph::new();
    for id in &[BACKDROP, CONTENT, CONTENT_BACKGROUND] {
        graph.reserve(id);
    }
    let mut root = graph.builder();
    let backdrop = root.rect(
        viewport,
        Styles::new()
            .with_id(BACKDROP)
            .with(keys::FILL, appearance.backdrop),
    );
    root.group(styles, |content| {
        content.rounded_rect(
            box_size,
            appearance.corner_radius,
            Styles::new()
                .with_id(CONTENT_BACKGROUND)
                .with(keys::FILL, fill),
        );
        spec.extend(content);
    });

    ModalState {
        graph,
        backdrop,
        content_bounds: Rect::new(Point2::from_vec(translate), box_size),
    }
}

/// A running modal.
#[derive(Debug)]
pub struct Modal {
    state: ModalState,
    upward: Sender<Event>,
}

impl Modal {
    /// Checks modal content before construction.
    pub fn validate(spec: &SpecValue) -> Result<ContentSpec, InvalidSpec> {
        content::validate(spec)
    }

    /// Constructs a modal, emitting events to the parent through `upward`.
    ///
    /// Fails if the viewport can't be queried.
    pub fn construct(
        spec: ContentSpec,
        options: &ModalOptions,
        upward: Sender<Event>,
    ) -> Result<Modal, ModalError> {
        let viewport = options.viewport.info()?;
        let state = assemble(
            &spec,
            viewport.size,
            options.styles.clone(),
            options.appearance,
        );
        Ok(Modal { state, upward })
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// The graph to display.
    pub fn graph(&self) -> &Graph {
        self.state.graph()
    }

    pub fn content_bounds(&self) -> Rect {
        self.state.content_bounds()
    }

    /// Handles raw input addressed to the modal's primitives.
    ///
    /// Only a pointer release on the backdrop does anything.
    pub fn handle_input(&self, input: &Input, context: &InputContext) {
        log::trace!("modal input {:?} on {:?}", input, context.target);
        match input {
            Input::Pointer(pointer)
                if pointer.phase == PointerPhase::Release && context.is_target(BACKDROP) =>
            {
                self.filter_event(Event::Click(Event::DISMISS.to_string()), self.state.backdrop);
            }
            _ => (),
        }
    }

    /// Wraps an event from the content and sends it to the parent.
    ///
    /// Always halts the original event.
    pub fn filter_event(&self, event: Event, source: NodeId) -> Filter {
        log::trace!("modal event {:?} from {:?}", event, source);
        self.emit(Event::modal(event));
        Filter::Halt
    }

    fn emit(&self, event: Event) {
        if let Err(err) = self.upward.send(event) {
            log::warn!("modal parent is gone; dropping {:?}", err.0);
        }
    }
}
