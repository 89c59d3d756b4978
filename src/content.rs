//! Modal content.
//!
//! Content is either a [`Component`], a component with an argument, or a function that adds
//! primitives to a group. Callers hand it over as a loosely-typed [`SpecValue`], which
//! [`validate`] narrows down to a [`ContentSpec`].

use crate::error::InvalidSpec;
use crate::graph::GroupBuilder;
use core::any::Any;
use core::fmt;
use std::sync::Arc;

/// An opaque component argument.
pub type Arg = Arc<dyn Any + Send + Sync>;

/// A function that builds content into a group.
pub type BuildFn = Arc<dyn Fn(&mut GroupBuilder<'_>) + Send + Sync>;

/// Something that can add itself to a graph.
pub trait Component: fmt::Debug + Send + Sync {
    /// Component name, for diagnostics.
    fn name(&self) -> &str;

    /// Adds the component to the group.
    fn extend(&self, group: &mut GroupBuilder<'_>);

    /// Adds the component to the group, configured with an argument.
    ///
    /// Ignores the argument by default.
    fn extend_with(&self, group: &mut GroupBuilder<'_>, arg: &Arg) {
        let _ = arg;
        log::warn!("component {} takes no argument; ignoring it", self.name());
        self.extend(group);
    }
}

/// Anything a caller may pass as modal content.
#[derive(Clone)]
pub enum SpecValue {
    Component(Arc<dyn Component>),
    Pair(Box<SpecValue>, Arg),
    Builder(BuildFn),
    Text(String),
    Number(f64),
}

impl SpecValue {
    pub fn component<C: Component + 'static>(component: C) -> SpecValue {
        SpecValue::Component(Arc::new(component))
    }

    pub fn with_arg<C, A>(component: C, arg: A) -> SpecValue
    where
        C: Component + 'static,
        A: Any + Send + Sync,
    {
        SpecValue::Pair(Box::new(SpecValue::component(component)), Arc::new(arg))
    }

    pub fn builder<F>(build: F) -> SpecValue
    where
        F: Fn(&mut GroupBuilder<'_>) + Send + Sync + 'static,
    {
        SpecValue::Builder(Arc::new(build))
    }
}

impl fmt::Debug for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpecValue::Component(c) => write!(f, "Component({})", c.name()),
            SpecValue::Pair(first, _) => write!(f, "Pair({:?}, ..)", first),
            SpecValue::Builder(_) => write!(f, "Builder(..)"),
            SpecValue::Text(text) => write!(f, "Text({:?})", text),
            SpecValue::Number(n) => write!(f, "Number({})", n),
        }
    }
}

/// Validated modal content.
#[derive(Clone)]
pub enum ContentSpec {
    ComponentRef(Arc<dyn Component>),
    ComponentRefWithArg(Arc<dyn Component>, Arg),
    BuilderFunction(BuildFn),
}

impl ContentSpec {
    /// Adds the content to a group.
    pub fn extend(&self, group: &mut GroupBuilder<'_>) {
        match self {
            ContentSpec::ComponentRef(component) => component.extend(group),
            ContentSpec::ComponentRefWithArg(component, arg) => component.extend_with(group, arg),
            ContentSpec::BuilderFunction(build) => build(group),
        }
    }
}

impl fmt::Debug for ContentSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentSpec::ComponentRef(c) => write!(f, "ComponentRef({})", c.name()),
            ContentSpec::ComponentRefWithArg(c, _) => {
                write!(f, "ComponentRefWithArg({}, ..)", c.name())
            }
            ContentSpec::BuilderFunction(_) => write!(f, "BuilderFunction(..)"),
        }
    }
}

/// Classifies modal content.
///
/// Has no side effects, so hosts can call it before constructing anything.
pub fn validate(spec: &SpecValue) -> Result<ContentSpec, InvalidSpec> {
    match spec {
        SpecValue::Component(component) => Ok(ContentSpec::ComponentRef(Arc::clone(component))),
        SpecValue::Pair(first, arg) => match &**first {
            SpecValue::Component(component) => Ok(ContentSpec::ComponentRefWithArg(
                Arc::clone(component),
                Arc::clone(arg),
            )),
            other => Err(InvalidSpec(format!("{:?} is not a component", other))),
        },
        SpecValue::Builder(build) => Ok(ContentSpec::BuilderFunction(Arc::clone(build))),
        SpecValue::Text(_) | SpecValue::Number(_) => Err(InvalidSpec(format!("{:?}", spec))),
    }
}
