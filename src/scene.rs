//! Scene: the ordered, immutable element sequence held by each history entry.
//!
//! Insertion order is paint order. Every element's id equals its index, so
//! the scene only ever grows or shrinks at the tail; mid-sequence removal
//! would leave a gap and is not offered.
//!
//! A `Scene` is cheap to clone (the elements sit behind an `Arc`) and never
//! changes after construction. Edits return a new scene, which leaves every
//! earlier history snapshot intact.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::sync::Arc;

use crate::element::{Element, ElementId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("element id {id} out of range for scene of {len} elements")]
    OutOfRange { id: ElementId, len: usize },
    #[error("element id {found} does not match its slot {expected}")]
    IdMismatch { expected: ElementId, found: ElementId },
    #[error("element {id} is not the last of {len}; only the tail can be removed")]
    NotLast { id: ElementId, len: usize },
}

/// An immutable snapshot of all elements on the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Arc<[Element]>,
}

impl Scene {
    /// The empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from elements whose ids already match their positions.
    ///
    /// # Errors
    ///
    /// Returns `IdMismatch` for the first element whose id differs from its index.
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, SceneError> {
        if let Some((expected, el)) = elements.iter().enumerate().find(|(i, el)| el.id != *i) {
            return Err(SceneError::IdMismatch { expected, found: el.id });
        }
        Ok(Self { elements: elements.into() })
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The id the next appended element must carry.
    #[must_use]
    pub fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    /// A new scene with `element` appended at the tail.
    ///
    /// # Errors
    ///
    /// Returns `IdMismatch` unless `element.id == self.next_id()`.
    pub fn with_appended(&self, element: Element) -> Result<Self, SceneError> {
        let expected = self.next_id();
        if element.id != expected {
            return Err(SceneError::IdMismatch { expected, found: element.id });
        }
        let mut elements = self.elements.to_vec();
        elements.push(element);
        Ok(Self { elements: elements.into() })
    }

    /// A new scene with the element in slot `element.id` replaced.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if no element has that id.
    pub fn with_replaced(&self, element: Element) -> Result<Self, SceneError> {
        let len = self.len();
        if element.id >= len {
            return Err(SceneError::OutOfRange { id: element.id, len });
        }
        let mut elements = self.elements.to_vec();
        let id = element.id;
        elements[id] = element;
        Ok(Self { elements: elements.into() })
    }

    /// A new scene without its last element, which must have id `id`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for an unknown id and `NotLast` for any element
    /// other than the tail.
    pub fn without_last(&self, id: ElementId) -> Result<Self, SceneError> {
        let len = self.len();
        if id >= len {
            return Err(SceneError::OutOfRange { id, len });
        }
        if id + 1 != len {
            return Err(SceneError::NotLast { id, len });
        }
        Ok(Self { elements: self.elements[..id].into() })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
