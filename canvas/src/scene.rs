//! Placeholder node graph drawn on the canvas.
//!
//! The viewer has no real tree-of-life data yet. [`Scene::placeholder`] grows
//! a deterministic random tree from a seed so there is something to pan and
//! zoom around. Node positions are world coordinates with the root at the
//! origin.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::Point;

/// Distance from the root to its direct children, in world units.
const ROOT_BRANCH_LENGTH: f64 = 220.0;

/// Branch length multiplier per level of depth.
const BRANCH_DECAY: f64 = 0.72;

/// Radius of the root node, in world units.
const ROOT_RADIUS: f64 = 30.0;

/// Radius multiplier per level of depth.
const RADIUS_DECAY: f64 = 0.8;

/// Nodes never shrink below this radius.
const MIN_RADIUS: f64 = 4.0;

/// One node of the placeholder graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: Point,
    pub radius: f64,
    /// Fill hue in degrees.
    pub hue: f64,
    pub depth: u32,
    /// Index of the parent node; `None` for the root.
    pub parent: Option<usize>,
}

/// The node graph the renderer draws.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Grow a random tree of `count` nodes. The same seed always yields the
    /// same scene.
    #[must_use]
    pub fn placeholder(seed: u64, count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut nodes: Vec<Node> = Vec::with_capacity(count);

        for index in 0..count {
            if index == 0 {
                nodes.push(Node {
                    position: Point::default(),
                    radius: ROOT_RADIUS,
                    hue: rng.random_range(0.0..360.0),
                    depth: 0,
                    parent: None,
                });
                continue;
            }

            let parent_index = rng.random_range(0..index);
            let parent = &nodes[parent_index];
            let depth = parent.depth + 1;
            let length = ROOT_BRANCH_LENGTH * BRANCH_DECAY.powi(i32::try_from(parent.depth).unwrap_or(i32::MAX));
            let angle = rng.random_range(0.0..TAU);
            let position = Point::new(
                parent.position.x + angle.cos() * length,
                parent.position.y + angle.sin() * length,
            );
            let radius = (parent.radius * RADIUS_DECAY).max(MIN_RADIUS);
            let hue = (parent.hue + rng.random_range(-40.0..40.0)).rem_euclid(360.0);

            nodes.push(Node { position, radius, hue, depth, parent: Some(parent_index) });
        }

        Self { nodes }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Parent/child position pairs, one per non-root node.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.parent.and_then(|p| self.nodes.get(p)).map(|parent| (parent.position, node.position)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
