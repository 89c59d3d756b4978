//! Events.
//!
//! There are two kinds of events. Raw [`Input`] comes from the driver and is addressed to the
//! primitive under the pointer (or the focused component, for keys). [`Event`]s are emitted by
//! components and filter upwards through the component hierarchy, where each ancestor may
//! transform them, pass them on, or stop them.

use cgmath::{Point2, Vector2};

/// Types of pointing devices or mechanisms.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    /// Touch input from a finger or something of the sort; is expected to be imprecise.
    Touch = 0,

    /// Pen input.
    Pen = 1,

    /// Any indirect input mechanism.
    Cursor = 2,
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The button went down.
    Press,
    /// The pointer moved while the button was held.
    Drag,
    /// The button was released.
    Release,
    /// The pointer moved without any button held.
    Move,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub phase: PointerPhase,
    pub button: PointerButton,

    /// Event location in the viewport coordinate system.
    pub location: Point2<f64>,

    /// The device type that emitted this pointer event.
    pub device: PointerDevice,
}

impl Pointer {
    /// A primary-button cursor event.
    pub fn new(phase: PointerPhase, location: Point2<f64>) -> Pointer {
        Pointer {
            phase,
            button: PointerButton::Primary,
            location,
            device: PointerDevice::Cursor,
        }
    }
}

/// Modifier key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub control: bool,
    pub option: bool,
    pub command: bool,
}

/// Keyboard layout-independent key identifiers.
///
/// Only keys that components commonly react to are listed; anything else arrives as
/// `Character`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Return,
    Tab,
    Space,
    Delete,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    Character(char),
}

/// A key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    /// False on release.
    pub pressed: bool,
}

/// A scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scroll {
    /// Event location in the viewport coordinate system.
    pub location: Point2<f64>,

    /// Scroll delta in points.
    pub delta: Vector2<f64>,
}

/// Raw input from the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Pointer(Pointer),
    Key(Key),
    Scroll(Scroll),
}

impl Input {
    /// Location of the input, if it has one.
    pub fn location(&self) -> Option<Point2<f64>> {
        match self {
            Input::Pointer(pointer) => Some(pointer.location),
            Input::Scroll(scroll) => Some(scroll.location),
            Input::Key(_) => None,
        }
    }
}

/// Where an input was delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputContext {
    /// Identifier of the primitive the input hit, if it has one.
    pub target: Option<String>,
}

impl InputContext {
    pub fn target(id: &str) -> InputContext {
        InputContext {
            target: Some(id.to_string()),
        }
    }

    pub fn is_target(&self, id: &str) -> bool {
        self.target.as_deref() == Some(id)
    }
}

/// An event filtering up from a component to its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Something identified by the given name was clicked.
    Click(String),

    /// Application-defined event.
    Custom(String),

    /// An event that came out of a modal.
    Modal(Box<Event>),
}

impl Event {
    /// Name of the click that asks for the modal to be dismissed.
    pub const DISMISS: &'static str = "dismiss";

    /// Wraps an event as coming from a modal.
    pub fn modal(event: Event) -> Event {
        Event::Modal(Box::new(event))
    }

    /// The event a modal emits when its backdrop is clicked.
    pub fn dismiss() -> Event {
        Event::modal(Event::Click(Event::DISMISS.to_string()))
    }

    /// Returns true if this is a modal asking to be dismissed.
    pub fn is_dismiss(&self) -> bool {
        match self {
            Event::Modal(inner) => match &**inner {
                Event::Click(id) => id == Event::DISMISS,
                _ => false,
            },
            _ => false,
        }
    }
}

/// What an event filter decided to do with an event.
///
/// Modals never let a raw event through, so halting is the only verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Stop the event here.
    Halt,
}

#[test]
fn test_dismiss_event() {
    assert!(Event::dismiss().is_dismiss());
    assert!(!Event::Click("dismiss".into()).is_dismiss());
    assert!(!Event::modal(Event::Click("ok".into())).is_dismiss());
}
