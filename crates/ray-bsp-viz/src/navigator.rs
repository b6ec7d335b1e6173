//! Tree navigation for interactive inspection.

use macroquad::prelude::*;
use ray_bsp::{BspNode, BspTree, NodeId, NodeKind, ObjectId};

use crate::{draw_bounds, draw_shape, object_color, Shape};

/// Child taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Walks a tree one child at a time, remembering the way back up.
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl Default for TreeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeNavigator {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Steps into a child. Returns false at a leaf.
    pub fn go<O>(&mut self, tree: &BspTree<O>, direction: Direction) -> bool {
        if tree.node(self.current(tree)).and_then(BspNode::children).is_some() {
            self.path.push(direction);
            true
        } else {
            false
        }
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input. Returns true if the current node changed.
    pub fn update<O>(&mut self, tree: &BspTree<O>) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::L) {
            changed = self.go(tree, Direction::Left);
        }
        if is_key_pressed(KeyCode::R) {
            changed = self.go(tree, Direction::Right);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::T) && !self.path.is_empty() {
            self.go_root();
            changed = true;
        }

        changed
    }

    /// Id of the node at the end of the path.
    pub fn current<O>(&self, tree: &BspTree<O>) -> NodeId {
        let mut id = NodeId::ROOT;
        for direction in &self.path {
            match tree.node(id).and_then(BspNode::children) {
                Some((left, right)) => {
                    id = match direction {
                        Direction::Left => left,
                        Direction::Right => right,
                    }
                }
                None => break,
            }
        }
        id
    }

    /// Draws the objects reachable from the current node, their leaf boxes,
    /// and the current node bounds on top. `hit` is drawn highlighted.
    pub fn render(&self, tree: &BspTree<Shape>, hit: Option<ObjectId>) {
        let current = self.current(tree);
        let mut stack = vec![current];
        while let Some(id) = stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };
            match node.kind() {
                NodeKind::Internal { left, right } => {
                    stack.push(*right);
                    stack.push(*left);
                }
                NodeKind::Leaf { objects } => {
                    draw_bounds(node.bounds(), Color::from_rgba(90, 90, 110, 255));
                    for &object_id in objects {
                        let Some(shape) = tree.object(object_id) else {
                            continue;
                        };
                        let color = if hit == Some(object_id) {
                            WHITE
                        } else {
                            object_color(object_id)
                        };
                        draw_shape(shape, color);
                    }
                }
            }
        }

        if let Some(node) = tree.node(current) {
            draw_bounds(node.bounds(), GREEN);
        }
    }

    /// Draws the navigation overlay.
    pub fn draw_ui<O>(&self, tree: &BspTree<O>, y_offset: f32) {
        let id = self.current(tree);
        let Some(node) = tree.node(id) else {
            return;
        };

        let path_str = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|d| match d {
                    Direction::Left => "L",
                    Direction::Right => "R",
                })
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        draw_text(
            &format!(
                "Node {id}: {} objects, axis {}, {} retries",
                node.object_count(),
                node.axis(),
                node.axis_retries()
            ),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_str, node.depth()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!("Bounds: {}", node.bounds()),
            10.0,
            y_offset + 40.0,
            16.0,
            GRAY,
        );
        let (label, color) = if node.is_leaf() {
            ("(leaf)", ORANGE)
        } else {
            ("[L]eft [R]ight", GREEN)
        };
        draw_text(label, 10.0, y_offset + 60.0, 18.0, color);
        draw_text("[P]arent | [T]op", 10.0, y_offset + 80.0, 16.0, DARKGRAY);
    }
}
