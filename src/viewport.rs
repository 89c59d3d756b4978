//! Viewports: the surfaces a graph is displayed on.

use crate::error::ViewportError;
use cgmath::Vector2;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

/// Information about a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportInfo {
    /// Surface size in pixels.
    pub size: Vector2<f64>,
}

/// Something that can report the current viewport information.
pub trait Viewport: fmt::Debug + Send + Sync {
    fn info(&self) -> Result<ViewportInfo, ViewportError>;
}

/// A viewport that never changes size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Vector2<f64>);

impl FixedViewport {
    pub fn new(width: f64, height: f64) -> FixedViewport {
        FixedViewport(Vector2::new(width, height))
    }
}

impl Viewport for FixedViewport {
    fn info(&self) -> Result<ViewportInfo, ViewportError> {
        Ok(ViewportInfo { size: self.0 })
    }
}

/// A resizable viewport owned by a driver.
///
/// Components only ever get [`ViewportHandle`]s, which stop working once the viewport is
/// dropped.
#[derive(Debug)]
pub struct SharedViewport {
    size: Arc<RwLock<Vector2<f64>>>,
}

impl SharedViewport {
    pub fn new(size: Vector2<f64>) -> SharedViewport {
        SharedViewport {
            size: Arc::new(RwLock::new(size)),
        }
    }

    pub fn resize(&self, size: Vector2<f64>) {
        log::debug!("viewport resized to {}x{}", size.x, size.y);
        *self.size.write() = size;
    }

    pub fn handle(&self) -> ViewportHandle {
        ViewportHandle {
            size: Arc::downgrade(&self.size),
        }
    }
}

impl Viewport for SharedViewport {
    fn info(&self) -> Result<ViewportInfo, ViewportError> {
        Ok(ViewportInfo {
            size: *self.size.read(),
        })
    }
}

/// A weak reference to a [`SharedViewport`].
#[derive(Debug, Clone)]
pub struct ViewportHandle {
    size: Weak<RwLock<Vector2<f64>>>,
}

impl Viewport for ViewportHandle {
    fn info(&self) -> Result<ViewportInfo, ViewportError> {
        let size = self.size.upgrade().ok_or(ViewportError::Closed)?;
        let size = *size.read();
        Ok(ViewportInfo { size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_follows_viewport() {
        let viewport = SharedViewport::new(Vector2::new(700., 600.));
        let handle = viewport.handle();
        assert_eq!(handle.info().unwrap().size, Vector2::new(700., 600.));

        viewport.resize(Vector2::new(800., 480.));
        assert_eq!(handle.info().unwrap().size, Vector2::new(800., 480.));

        drop(viewport);
        assert_eq!(handle.info(), Err(ViewportError::Closed));
    }
}
