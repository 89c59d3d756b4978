//! Graph primitives.

use crate::rect::Rect;
use cgmath::Vector2;
use core::any::Any;
use core::fmt;
use std::sync::Arc;

/// Opaque component properties stored in a component instance node.
pub type Props = Arc<dyn Any + Send + Sync>;

/// What a graph node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Groups children; draws nothing on its own.
    Group,

    /// A rectangle with its top left corner at the local origin.
    Rect { size: Vector2<f64> },

    /// A rectangle with rounded corners.
    RoundedRect { size: Vector2<f64>, radius: f64 },

    /// A component instance. The hosting framework turns this into a running component.
    Component(ComponentNode),
}

impl Primitive {
    /// Local bounds for pointer hit testing, if this primitive occupies any space.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Primitive::Rect { size } | Primitive::RoundedRect { size, .. } => {
                Some(Rect::from_size(*size))
            }
            Primitive::Group | Primitive::Component(_) => None,
        }
    }
}

/// A component instance: a component name and the properties it will be started with.
#[derive(Clone)]
pub struct ComponentNode {
    pub name: String,
    pub props: Props,
}

impl ComponentNode {
    /// Returns the properties if they are of type `T`.
    pub fn props<T: Any>(&self) -> Option<&T> {
        self.props.downcast_ref::<T>()
    }
}

impl fmt::Debug for ComponentNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ComponentNode")
            .field("name", &self.name)
            .field("props", &format_args!(".."))
            .finish()
    }
}

/// Props are compared by identity.
impl PartialEq for ComponentNode {
    fn eq(&self, other: &ComponentNode) -> bool {
        self.name == other.name
            && Arc::as_ptr(&self.props) as *const () == Arc::as_ptr(&other.props) as *const ()
    }
}
