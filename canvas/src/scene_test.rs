#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Point;

#[test]
fn placeholder_has_requested_size() {
    assert_eq!(Scene::placeholder(7, 120).len(), 120);
    assert!(Scene::placeholder(7, 0).is_empty());
    assert_eq!(Scene::placeholder(7, 0).edges().count(), 0);
}

#[test]
fn placeholder_is_deterministic_per_seed() {
    let a = Scene::placeholder(42, 64);
    let b = Scene::placeholder(42, 64);
    assert_eq!(a.nodes(), b.nodes());

    let c = Scene::placeholder(43, 64);
    assert_ne!(a.nodes(), c.nodes());
}

#[test]
fn root_sits_at_origin() {
    let scene = Scene::placeholder(1, 10);
    let root = &scene.nodes()[0];
    assert_eq!(root.position, Point::default());
    assert_eq!(root.parent, None);
    assert_eq!(root.depth, 0);
    assert_eq!(root.radius, ROOT_RADIUS);
}

#[test]
fn parents_precede_children() {
    let scene = Scene::placeholder(9, 200);
    for (index, node) in scene.nodes().iter().enumerate().skip(1) {
        let parent = node.parent.unwrap();
        assert!(parent < index);
        let p = &scene.nodes()[parent];
        assert_eq!(node.depth, p.depth + 1);
        assert!(node.radius <= p.radius);
        assert!(node.radius >= MIN_RADIUS);
    }
}

#[test]
fn children_sit_one_branch_length_from_parent() {
    let scene = Scene::placeholder(3, 50);
    for node in scene.nodes().iter().skip(1) {
        let p = &scene.nodes()[node.parent.unwrap()];
        let expected = ROOT_BRANCH_LENGTH * BRANCH_DECAY.powi(i32::try_from(p.depth).unwrap());
        let dist = (node.position.x - p.position.x).hypot(node.position.y - p.position.y);
        assert!((dist - expected).abs() < 1e-9, "{dist} vs {expected}");
    }
}

#[test]
fn hues_stay_in_range() {
    let scene = Scene::placeholder(11, 300);
    assert!(scene.nodes().iter().all(|n| (0.0..360.0).contains(&n.hue)));
}

#[test]
fn one_edge_per_child() {
    let scene = Scene::placeholder(5, 30);
    let edges: Vec<_> = scene.edges().collect();
    assert_eq!(edges.len(), 29);
    let first_child = &scene.nodes()[1];
    assert_eq!(edges[0], (Point::default(), first_child.position));
}

#[test]
fn edges_skip_dangling_parents() {
    let scene = Scene::new(vec![Node {
        position: Point::new(1.0, 1.0),
        radius: 5.0,
        hue: 0.0,
        depth: 1,
        parent: Some(9),
    }]);
    assert_eq!(scene.edges().count(), 0);
}
