// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name filtering, click resolution, and the indexed shape table.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

use crate::hit::{HitParams, topmost_hit};
use crate::shape::{GeometryError, Shape, ShapeId};

/// Returns the shapes whose name contains `query`, ignoring case.
///
/// - An empty query returns every shape.
/// - Matching is a plain substring test on the Unicode lowercase forms of both
///   strings; there is no fuzzy matching.
/// - Shapes with an empty name never match a non-empty query.
/// - The input order is kept. It is also the draw order: shapes later in the
///   result are drawn on top of (and occlude) earlier ones.
#[must_use]
pub fn filter_by_name<'a>(shapes: &'a [Shape], query: &str) -> Vec<&'a Shape> {
    if query.is_empty() {
        return shapes.iter().collect();
    }
    let needle = query.to_lowercase();
    shapes
        .iter()
        .filter(|shape| !shape.name.is_empty() && shape.name.to_lowercase().contains(&needle))
        .collect()
}

/// Maps the shape the pointer landed on to the shape that becomes selected.
///
/// Only selectable shapes can be selected. Decorative shapes still receive
/// the click (and occlude what is below them) but resolve to `None`.
#[must_use]
pub fn resolve_click(shape: &Shape) -> Option<&Shape> {
    shape.selectable.then_some(shape)
}

/// Error building a [`SceneQuery`].
#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    /// The shape at `index` has an empty id.
    EmptyId {
        /// Position in the input.
        index: usize,
    },
    /// Two shapes share an id.
    DuplicateId(ShapeId),
    /// A shape has invalid geometry.
    Geometry {
        /// Offending shape.
        id: ShapeId,
        /// What is wrong with it.
        source: GeometryError,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "shape at index {index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "duplicate shape id `{id}`"),
            Self::Geometry { id, source } => write!(f, "shape `{id}`: {source}"),
        }
    }
}

impl core::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Geometry { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A validated, immutable shape table with an id index.
///
/// The table order is the draw order. Filtering produces derived views and
/// never changes the table.
#[derive(Clone, Debug)]
pub struct SceneQuery {
    shapes: Vec<Shape>,
    index: HashMap<ShapeId, usize>,
}

impl SceneQuery {
    /// Builds the table, rejecting empty or duplicate ids and bad geometry.
    pub fn new(shapes: Vec<Shape>) -> Result<Self, SceneError> {
        let mut index = HashMap::with_capacity(shapes.len());
        for (i, shape) in shapes.iter().enumerate() {
            if shape.id.as_str().is_empty() {
                return Err(SceneError::EmptyId { index: i });
            }
            shape
                .geometry
                .validate()
                .map_err(|source| SceneError::Geometry {
                    id: shape.id.clone(),
                    source,
                })?;
            if index.insert(shape.id.clone(), i).is_some() {
                return Err(SceneError::DuplicateId(shape.id.clone()));
            }
        }
        Ok(Self { shapes, index })
    }

    /// Returns all shapes in draw order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the table has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Looks up a shape by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.index.get(id).map(|&i| &self.shapes[i])
    }

    /// Returns the render list for `query`. See [`filter_by_name`].
    #[must_use]
    pub fn filtered(&self, query: &str) -> Vec<&Shape> {
        filter_by_name(&self.shapes, query)
    }

    /// Resolves a click dispatched by shape id.
    ///
    /// Unknown ids and decorative shapes resolve to `None`. The current
    /// filter is not consulted.
    #[must_use]
    pub fn resolve_click_id(&self, id: &str) -> Option<&Shape> {
        self.get(id).and_then(resolve_click)
    }

    /// Resolves a click at scene point `pt` against the render list for `query`.
    ///
    /// The topmost shape under the pointer receives the click; if it is
    /// decorative the click selects nothing, even when a selectable shape lies
    /// underneath.
    #[must_use]
    pub fn resolve_click_at(&self, query: &str, pt: Point, params: &HitParams) -> Option<&Shape> {
        let render_list = self.filtered(query);
        topmost_hit(&render_list, pt, params).and_then(resolve_click)
    }

    /// Returns the shape names, in draw order, that match `query`.
    #[must_use]
    pub fn matching_names(&self, query: &str) -> Vec<String> {
        self.filtered(query)
            .into_iter()
            .map(|shape| shape.name.clone())
            .collect()
    }
}
