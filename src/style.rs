//! Style maps.
//!
//! Primitives take an open-ended map of style keys. A few keys are understood by the graph
//! itself (`id`, `fill`, `translate`); anything else is carried along untouched so that
//! embedded content can pick it up.

use crate::color::Color;
use crate::dimension::Size;
use cgmath::Vector2;
use std::collections::BTreeMap;

/// Well-known style keys.
pub mod keys {
    /// Node identifier; see [`Graph::get`](crate::Graph::get).
    pub const ID: &str = "id";
    /// Fill color of rectangles.
    pub const FILL: &str = "fill";
    /// Translation of a node and its children.
    pub const TRANSLATE: &str = "translate";
    /// Modal content size. Consumed by the modal, never forwarded.
    pub const SIZE: &str = "size";
    /// Theme hint for embedded content.
    pub const THEME: &str = "theme";
}

/// A single style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Id(String),
    Fill(Color),
    Translate(Vector2<f64>),
    Size(Size),
    Text(String),
    Number(f64),
    Flag(bool),
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Fill(color)
    }
}

impl From<Size> for StyleValue {
    fn from(size: Size) -> Self {
        StyleValue::Size(size)
    }
}

impl From<Vector2<f64>> for StyleValue {
    fn from(offset: Vector2<f64>) -> Self {
        StyleValue::Translate(offset)
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<bool> for StyleValue {
    fn from(flag: bool) -> Self {
        StyleValue::Flag(flag)
    }
}

/// An ordered style map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Styles(BTreeMap<String, StyleValue>);

impl Styles {
    pub fn new() -> Styles {
        Styles(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<StyleValue>) -> Styles {
        self.insert(key, value);
        self
    }

    /// Builder-style id.
    pub fn with_id(self, id: &str) -> Styles {
        self.with(keys::ID, StyleValue::Id(id.to_string()))
    }

    /// Inserts a value, replacing any previous one.
    pub fn insert(&mut self, key: &str, value: impl Into<StyleValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The node identifier, if any.
    ///
    /// Plain text is accepted as an identifier too.
    pub fn id(&self) -> Option<&str> {
        match self.get(keys::ID)? {
            StyleValue::Id(id) | StyleValue::Text(id) => Some(id),
            _ => None,
        }
    }

    pub fn fill(&self) -> Option<Color> {
        match self.get(keys::FILL)? {
            StyleValue::Fill(color) => Some(*color),
            _ => None,
        }
    }

    pub fn translate(&self) -> Option<Vector2<f64>> {
        match self.get(keys::TRANSLATE)? {
            StyleValue::Translate(offset) => Some(*offset),
            _ => None,
        }
    }

    /// Removes and returns the `size` entry.
    ///
    /// The key is removed even if it holds something other than a size.
    pub fn take_size(&mut self) -> Option<Size> {
        match self.remove(keys::SIZE)? {
            StyleValue::Size(size) => Some(size),
            other => {
                log::warn!("ignoring malformed size style: {:?}", other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_ignores_other_values() {
        let mut styles = Styles::new().with(keys::TRANSLATE, "oops");
        assert_eq!(styles.translate(), None);
        styles.insert(keys::TRANSLATE, Vector2::new(1., 2.));
        assert_eq!(styles.translate(), Some(Vector2::new(1., 2.)));
    }

    #[test]
    fn take_size_removes_key() {
        let mut styles = Styles::new()
            .with(keys::SIZE, Size::new(200., 150.))
            .with(keys::FILL, Color::BLACK);
        assert_eq!(styles.take_size(), Some(Size::new(200., 150.)));
        assert!(!styles.contains(keys::SIZE));
        assert_eq!(styles.fill(), Some(Color::BLACK));
        assert_eq!(styles.take_size(), None);
    }

    #[test]
    fn malformed_size_is_dropped() {
        let mut styles = Styles::new().with(keys::SIZE, 3.);
        assert_eq!(styles.take_size(), None);
        assert!(styles.is_empty());
    }
}
