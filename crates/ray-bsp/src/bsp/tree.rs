//! BSP tree container, construction and closest-hit queries.

use nalgebra::Point3;
use tracing::{debug, debug_span, trace};

use crate::{Aabb, Axis, BspError, BuildConfig, Intersection, Object, ObjectId, Ray, Result};

use super::node::{BspNode, NodeId, NodeKind};
use super::pass::SearchPass;
use super::split::{attempt_split, NodeState, SplitOutcome};
use super::stats::{TreeDump, TreeStats};

/// A loose Binary Space Partitioning tree over bounded objects.
///
/// Each node splits its objects on one axis at the median of their extents.
/// Objects crossing the split are referenced from both children rather than
/// cut, so the tree answers closest-hit ray queries exactly while only ever
/// calling [`Object::bounds`] and [`Object::intersect`].
///
/// # Construction
///
/// ```ignore
/// use ray_bsp::{BspTree, BuildConfig, Sphere};
///
/// let spheres: Vec<Sphere> = /* ... */;
/// let tree = BspTree::build(spheres, &BuildConfig::default())?;
/// ```
///
/// # Queries
///
/// [`closest_intersection`](BspTree::closest_intersection) is a stateless
/// query that may run concurrently from many threads.
/// [`closest_intersection_clipped`](BspTree::closest_intersection_clipped)
/// restricts the search to a clip region and memoizes exhausted subtrees in
/// a caller-owned [`SearchPass`].
///
/// The tree is immutable once built.
#[derive(Debug, Clone)]
pub struct BspTree<O> {
    objects: Vec<O>,
    nodes: Vec<BspNode>,
    config: BuildConfig,
}

impl<O: Object> BspTree<O> {
    /// Builds a tree over `objects`.
    ///
    /// Every object's bounds must be finite and well-ordered; the first
    /// object that violates this is reported as
    /// [`BspError::InvalidBounds`]. Object sets that cannot be separated on
    /// any axis are not an error and end up in a single oversized leaf.
    pub fn build(objects: Vec<O>, config: &BuildConfig) -> Result<Self> {
        config.validate()?;
        let _span = debug_span!("bsp_build", objects = objects.len()).entered();

        let boxes = objects
            .iter()
            .enumerate()
            .map(|(index, object)| {
                let bounds = object.bounds();
                if bounds.is_valid() {
                    Ok(bounds)
                } else {
                    Err(BspError::InvalidBounds {
                        object: ObjectId::new(index),
                        bounds,
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let nodes = build_nodes(&boxes, config);
        let tree = Self {
            objects,
            nodes,
            config: *config,
        };

        let stats = tree.stats();
        debug!(
            nodes = stats.node_count,
            leaves = stats.leaf_count,
            max_depth = stats.max_depth,
            object_references = stats.object_references,
            oversized_leaves = stats.oversized_leaves,
            "bsp build complete"
        );

        Ok(tree)
    }

    /// Builds a tree using [`BuildConfig::default`].
    pub fn from_objects(objects: Vec<O>) -> Result<Self> {
        Self::build(objects, &BuildConfig::default())
    }

    /// Returns the closest object hit by `ray`, or the miss sentinel.
    ///
    /// Subtrees whose bounds the ray misses are skipped. The query reads the
    /// tree only and returns the same result every time it is asked.
    pub fn closest_intersection(&self, ray: &Ray) -> Intersection<'_, O> {
        self.closest_in_node(NodeId::ROOT, ray)
    }

    /// Returns the closest hit among subtrees that the ray reaches inside the
    /// clip region `[min, max]` and that are not yet exhausted in `pass`.
    ///
    /// Leaves scanned by this call are marked searched in `pass`, and so is
    /// every internal node whose two children are both searched. A later
    /// call with the same pass skips those subtrees, so successive calls
    /// return hits from parts of the tree not yet visited. Call
    /// [`SearchPass::clear`] to start over.
    ///
    /// Object hits are computed over the whole ray: a scanned leaf may
    /// report a hit lying outside the clip region.
    ///
    /// Fails with [`BspError::PassMismatch`] if `pass` was not created for
    /// this tree.
    pub fn closest_intersection_clipped(
        &self,
        ray: &Ray,
        max: &Point3<f64>,
        min: &Point3<f64>,
        pass: &mut SearchPass,
    ) -> Result<Intersection<'_, O>> {
        pass.check(self)?;
        Ok(self.clipped_in_node(NodeId::ROOT, ray, max, min, pass))
    }

    /// Returns the closest hit by testing every object, ignoring the tree.
    ///
    /// This is the reference the tree queries must agree with.
    pub fn closest_intersection_linear(&self, ray: &Ray) -> Intersection<'_, O> {
        self.scan((0..self.objects.len()).map(ObjectId::new), ray)
    }

    fn closest_in_node(&self, id: NodeId, ray: &Ray) -> Intersection<'_, O> {
        let node = &self.nodes[id.index()];
        if node.bounds().intersect_ray(ray).is_none() {
            return Intersection::none();
        }

        match node.kind() {
            NodeKind::Internal { left, right } => {
                let left_hit = self.closest_in_node(*left, ray);
                let right_hit = self.closest_in_node(*right, ray);
                left_hit.closer(right_hit)
            }
            NodeKind::Leaf { objects } => self.scan(objects.iter().copied(), ray),
        }
    }

    fn clipped_in_node(
        &self,
        id: NodeId,
        ray: &Ray,
        max: &Point3<f64>,
        min: &Point3<f64>,
        pass: &mut SearchPass,
    ) -> Intersection<'_, O> {
        let node = &self.nodes[id.index()];
        if pass.is_searched(id) || node.bounds().intersect_ray_clipped(ray, max, min).is_none() {
            return Intersection::none();
        }

        match node.kind() {
            NodeKind::Internal { left, right } => {
                let left_hit = self.clipped_in_node(*left, ray, max, min, pass);
                let right_hit = self.clipped_in_node(*right, ray, max, min, pass);
                if pass.is_searched(*left) && pass.is_searched(*right) {
                    pass.mark(id);
                }
                left_hit.closer(right_hit)
            }
            NodeKind::Leaf { objects } => {
                pass.mark(id);
                self.scan(objects.iter().copied(), ray)
            }
        }
    }

    /// Linear scan keeping the first hit with the smallest distance.
    fn scan(&self, ids: impl IntoIterator<Item = ObjectId>, ray: &Ray) -> Intersection<'_, O> {
        let mut closest = Intersection::none();
        for id in ids {
            let object = &self.objects[id.index()];
            if let Some(distance) = object.intersect(ray) {
                if distance < closest.distance() {
                    closest = Intersection::new(distance, id, object);
                }
            }
        }
        closest
    }
}

impl<O> BspTree<O> {
    /// Returns the root node. Every tree has one, even over no objects.
    #[inline]
    pub fn root(&self) -> &BspNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Returns a node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&BspNode> {
        self.nodes.get(id.index())
    }

    /// Returns all nodes. The root is at index 0.
    #[inline]
    pub fn nodes(&self) -> &[BspNode] {
        &self.nodes
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the indexed objects in their original order.
    #[inline]
    pub fn objects(&self) -> &[O] {
        &self.objects
    }

    /// Returns an object by id.
    #[inline]
    pub fn object(&self, id: ObjectId) -> Option<&O> {
        self.objects.get(id.index())
    }

    /// Returns the number of indexed objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the tree indexes no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the configuration the tree was built with.
    #[inline]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Returns the number of levels in the tree (1 for a single leaf).
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(BspNode::depth).max().map_or(0, |d| d + 1)
    }

    /// Creates a fresh search pass sized for this tree.
    pub fn search_pass(&self) -> SearchPass {
        SearchPass::new(self.nodes.len())
    }

    /// Collects structural statistics.
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(self)
    }

    /// Returns a displayable per-node dump of the tree.
    pub fn dump(&self) -> TreeDump<'_, O> {
        TreeDump::new(self)
    }

    /// Consumes the tree and returns the objects.
    pub fn into_objects(self) -> Vec<O> {
        self.objects
    }
}

/// A node waiting to be built.
struct Pending {
    id: NodeId,
    depth: usize,
    axis: Axis,
    objects: Vec<ObjectId>,
}

/// Builds all nodes top-down. Children get their ids when their parent
/// splits, and are filled in when popped from the work stack.
fn build_nodes(boxes: &[Aabb], config: &BuildConfig) -> Vec<BspNode> {
    let mut nodes = vec![placeholder()];
    let mut stack = vec![Pending {
        id: NodeId::ROOT,
        depth: 0,
        axis: config.initial_axis,
        objects: (0..boxes.len()).map(ObjectId::new).collect(),
    }];

    while let Some(Pending {
        id,
        depth,
        axis,
        objects,
    }) = stack.pop()
    {
        let bounds: Aabb = objects.iter().map(|o| boxes[o.index()]).collect();
        let mut state = NodeState {
            objects,
            axis,
            axis_retries: 0,
        };

        let node = loop {
            match attempt_split(&state, boxes, config) {
                SplitOutcome::Retry(next) => {
                    trace!(depth, from = %state.axis, to = %next, "split separated nothing, retrying");
                    state.axis = next;
                    state.axis_retries += 1;
                }
                SplitOutcome::Leaf => {
                    if state.objects.len() > config.min_object_count {
                        debug!(
                            depth,
                            objects = state.objects.len(),
                            "no axis separates the objects, keeping an oversized leaf"
                        );
                    }
                    break BspNode::leaf(depth, state.axis, state.axis_retries, bounds, state.objects);
                }
                SplitOutcome::Split { left, right } => {
                    let left_id = NodeId::new(nodes.len());
                    let right_id = NodeId::new(nodes.len() + 1);
                    nodes.push(placeholder());
                    nodes.push(placeholder());

                    let child_axis = state.axis.next();
                    stack.push(Pending {
                        id: right_id,
                        depth: depth + 1,
                        axis: child_axis,
                        objects: right,
                    });
                    stack.push(Pending {
                        id: left_id,
                        depth: depth + 1,
                        axis: child_axis,
                        objects: left,
                    });

                    break BspNode::internal(
                        depth,
                        state.axis,
                        state.axis_retries,
                        bounds,
                        state.objects.len(),
                        left_id,
                        right_id,
                    );
                }
            }
        };

        debug!(
            depth,
            objects = node.object_count(),
            bounds = %node.bounds(),
            axis = %node.axis(),
            axis_retries = node.axis_retries(),
            leaf = node.is_leaf(),
            "bsp node"
        );
        nodes[id.index()] = node;
    }

    nodes
}

/// Slot reserved for a node that is still on the work stack.
fn placeholder() -> BspNode {
    BspNode::leaf(0, Axis::X, 0, Aabb::empty(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cuboid, Sphere};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::cell::Cell;

    fn cube(x: f64, y: f64, z: f64) -> Cuboid {
        Cuboid::new(Point3::new(x, y, z), Vector3::new(0.5, 0.5, 0.5))
    }

    fn row_of_three() -> Vec<Cuboid> {
        vec![cube(0.0, 0.0, 0.0), cube(5.0, 0.0, 0.0), cube(10.0, 0.0, 0.0)]
    }

    fn fine_config() -> BuildConfig {
        BuildConfig::default().with_min_object_count(1)
    }

    fn leaf_holding<O>(tree: &BspTree<O>, object: usize) -> NodeId {
        let index = tree
            .nodes()
            .iter()
            .position(|n| n.objects().contains(&ObjectId::new(object)))
            .unwrap();
        NodeId::new(index)
    }

    /// Counts calls to `intersect` on the wrapped object.
    struct Counting<'a> {
        inner: Cuboid,
        calls: &'a Cell<usize>,
    }

    impl Object for Counting<'_> {
        fn bounds(&self) -> Aabb {
            self.inner.bounds()
        }

        fn intersect(&self, ray: &Ray) -> Option<f64> {
            self.calls.set(self.calls.get() + 1);
            self.inner.intersect(ray)
        }
    }

    /// Reports whatever bounds it is given.
    #[derive(Debug)]
    struct Broken(Aabb);

    impl Object for Broken {
        fn bounds(&self) -> Aabb {
            self.0
        }

        fn intersect(&self, _ray: &Ray) -> Option<f64> {
            None
        }
    }

    #[test]
    fn build_empty() {
        let tree = BspTree::<Sphere>::from_objects(vec![]).unwrap();
        assert!(tree.is_empty());
        assert!(tree.root().is_leaf());
        assert!(tree.root().bounds().is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 1);

        let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
        assert!(!tree.closest_intersection(&ray).did_intersect());
    }

    #[test]
    fn build_single_object() {
        let tree = BspTree::from_objects(vec![cube(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().objects(), &[ObjectId::new(0)]);
        assert_eq!(tree.root().bounds().min, Point3::new(0.5, 1.5, 2.5));
    }

    #[test]
    fn row_of_three_splits_two_one() {
        let tree = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let root = tree.root();
        let (left, right) = root.children().unwrap();

        assert_eq!(root.axis(), Axis::X);
        assert_eq!(root.object_count(), 3);
        assert_eq!(tree.node(left).unwrap().object_count(), 2);
        assert_eq!(tree.node(right).unwrap().objects(), &[ObjectId::new(2)]);

        // The left pair shares its Y and Z extents, so it only separates
        // after retrying all the way round to X.
        let left_node = tree.node(left).unwrap();
        assert_eq!(left_node.axis(), Axis::X);
        assert_eq!(left_node.axis_retries(), 2);
        let (a, b) = left_node.children().unwrap();
        assert_eq!(tree.node(a).unwrap().objects(), &[ObjectId::new(0)]);
        assert_eq!(tree.node(b).unwrap().objects(), &[ObjectId::new(1)]);
        assert_eq!(tree.node(a).unwrap().axis(), Axis::Y);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn row_of_three_hits_nearest_first() {
        let tree = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let ray = Ray::towards(Point3::new(-10.0, 0.0, 0.0), Point3::new(20.0, 0.0, 0.0));

        let hit = tree.closest_intersection(&ray);
        assert!(hit.did_intersect());
        assert_eq!(hit.object_id(), Some(ObjectId::new(0)));
        assert_relative_eq!(hit.distance(), 9.5, epsilon = 1e-9);
    }

    #[test]
    fn identical_objects_end_in_oversized_leaf() {
        let objects = vec![
            Cuboid::from_bounds(Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)));
            5
        ];
        let tree = BspTree::from_objects(objects).unwrap();

        let root = tree.root();
        assert!(root.is_leaf());
        assert_eq!(root.objects().len(), 5);
        assert_eq!(root.axis_retries(), 2);
        assert_eq!(root.axis(), Axis::Z);
        assert_eq!(tree.stats().oversized_leaves, 1);
    }

    #[test]
    fn retries_respect_config() {
        let objects = vec![cube(0.0, 0.0, 0.0), cube(0.0, 5.0, 0.0), cube(0.0, 10.0, 0.0)];
        let config = fine_config().with_max_axis_retries(0);
        let tree = BspTree::build(objects.clone(), &config).unwrap();
        // Spread only along Y, so splitting on X alone fails.
        assert!(tree.root().is_leaf());

        let tree = BspTree::build(objects, &fine_config()).unwrap();
        assert!(!tree.root().is_leaf());
        assert_eq!(tree.root().axis(), Axis::Y);
        assert_eq!(tree.root().axis_retries(), 1);
    }

    #[test]
    fn invalid_bounds_rejected() {
        let good = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let bad = Aabb::new(Point3::new(0.0, f64::NAN, 0.0), Point3::new(1.0, 1.0, 1.0));
        let err = BspTree::from_objects(vec![Broken(good), Broken(bad)]).unwrap_err();
        // NaN bounds never compare equal, so match on the id only.
        assert!(matches!(err, BspError::InvalidBounds { object, .. } if object == ObjectId::new(1)));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let inverted = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
        let err = BspTree::from_objects(vec![Broken(inverted)]).unwrap_err();
        assert!(matches!(err, BspError::InvalidBounds { object, .. } if object == ObjectId::new(0)));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = BuildConfig::default().with_max_axis_retries(5);
        let err = BspTree::build(row_of_three(), &config).unwrap_err();
        assert!(matches!(err, BspError::InvalidConfig(_)));
    }

    #[test]
    fn unbounded_query_is_idempotent() {
        let tree = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let ray = Ray::new(Point3::new(20.0, 0.1, -0.2), Vector3::new(-1.0, 0.0, 0.0));

        let first = tree.closest_intersection(&ray);
        let second = tree.closest_intersection(&ray);
        assert_eq!(first.object_id(), Some(ObjectId::new(2)));
        assert_eq!(first.object_id(), second.object_id());
        assert_eq!(first.distance(), second.distance());
    }

    #[test]
    fn missing_ray_returns_sentinel() {
        let tree = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 3.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let hit = tree.closest_intersection(&ray);
        assert!(!hit.did_intersect());
        assert_eq!(hit.distance(), f64::INFINITY);
    }

    #[test]
    fn tree_matches_linear_scan() {
        let mut objects = Vec::new();
        for i in 0..6 {
            for j in 0..6 {
                let center = Point3::new(i as f64 * 2.0, j as f64 * 1.5, (i + j) as f64 * 0.5);
                objects.push(Sphere::new(center, 0.6));
            }
        }
        let tree = BspTree::from_objects(objects).unwrap();
        let origin = Point3::new(-5.0, -4.0, -3.0);

        for i in 0..12 {
            for j in 0..12 {
                let target = Point3::new(i as f64, j as f64 * 0.75, 2.0);
                let ray = Ray::towards(origin, target);
                let fast = tree.closest_intersection(&ray);
                let slow = tree.closest_intersection_linear(&ray);
                assert_eq!(fast.did_intersect(), slow.did_intersect());
                if slow.did_intersect() {
                    assert_relative_eq!(fast.distance(), slow.distance(), epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn leaves_skipped_by_bounds_are_not_scanned() {
        let calls = Cell::new(0);
        let objects: Vec<Counting<'_>> = row_of_three()
            .into_iter()
            .map(|inner| Counting {
                inner,
                calls: &calls,
            })
            .collect();
        let tree = BspTree::build(objects, &fine_config()).unwrap();

        // Passes only through the last cube.
        let ray = Ray::new(Point3::new(10.0, -5.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let hit = tree.closest_intersection(&ray);
        assert_eq!(hit.object_id(), Some(ObjectId::new(2)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clipped_query_memoizes_exhausted_subtrees() {
        let calls = Cell::new(0);
        let objects: Vec<Counting<'_>> = row_of_three()
            .into_iter()
            .map(|inner| Counting {
                inner,
                calls: &calls,
            })
            .collect();
        let tree = BspTree::build(objects, &fine_config()).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let max = Point3::new(100.0, 100.0, 100.0);
        let min = Point3::new(-100.0, -100.0, -100.0);

        let mut pass = tree.search_pass();
        let hit = tree
            .closest_intersection_clipped(&ray, &max, &min, &mut pass)
            .unwrap();
        assert_eq!(hit.object_id(), Some(ObjectId::new(0)));
        assert_relative_eq!(hit.distance(), 9.5, epsilon = 1e-9);
        assert_eq!(calls.get(), 3);
        assert_eq!(pass.searched_count(), tree.node_count());
        assert!(pass.is_searched(NodeId::ROOT));

        // Everything is exhausted: the same pass yields nothing and scans nothing.
        let again = tree
            .closest_intersection_clipped(&ray, &max, &min, &mut pass)
            .unwrap();
        assert!(!again.did_intersect());
        assert_eq!(calls.get(), 3);

        pass.clear();
        assert_eq!(pass.searched_count(), 0);
        let fresh = tree
            .closest_intersection_clipped(&ray, &max, &min, &mut pass)
            .unwrap();
        assert_eq!(fresh.object_id(), Some(ObjectId::new(0)));
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn clipped_query_skips_regions_outside_clip() {
        let tree = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let max = Point3::new(20.0, 1.0, 1.0);
        let min = Point3::new(2.0, -1.0, -1.0);

        let mut pass = tree.search_pass();
        let hit = tree
            .closest_intersection_clipped(&ray, &max, &min, &mut pass)
            .unwrap();
        assert_eq!(hit.object_id(), Some(ObjectId::new(1)));
        assert_relative_eq!(hit.distance(), 14.5, epsilon = 1e-9);

        let first = leaf_holding(&tree, 0);
        let second = leaf_holding(&tree, 1);
        let third = leaf_holding(&tree, 2);
        assert!(!pass.is_searched(first));
        assert!(pass.is_searched(second));
        assert!(pass.is_searched(third));

        // The left subtree still has an unsearched leaf, so neither it nor
        // the root is exhausted.
        let (left, right) = tree.root().children().unwrap();
        assert!(!pass.is_searched(left));
        assert!(pass.is_searched(right));
        assert!(!pass.is_searched(NodeId::ROOT));
    }

    #[test]
    fn clear_subtree_resets_only_that_subtree() {
        let tree = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let max = Point3::new(100.0, 100.0, 100.0);
        let min = Point3::new(-100.0, -100.0, -100.0);

        let mut pass = tree.search_pass();
        tree.closest_intersection_clipped(&ray, &max, &min, &mut pass)
            .unwrap();
        assert_eq!(pass.searched_count(), tree.node_count());

        let (left, right) = tree.root().children().unwrap();
        pass.clear_subtree(&tree, left);
        assert!(!pass.is_searched(left));
        assert!(!pass.is_searched(leaf_holding(&tree, 0)));
        assert!(!pass.is_searched(leaf_holding(&tree, 1)));
        assert!(pass.is_searched(right));
        assert!(pass.is_searched(NodeId::ROOT));
    }

    #[test]
    fn pass_from_other_tree_rejected() {
        let small = BspTree::from_objects(vec![cube(0.0, 0.0, 0.0)]).unwrap();
        let big = BspTree::build(row_of_three(), &fine_config()).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let max = Point3::new(100.0, 100.0, 100.0);
        let min = Point3::new(-100.0, -100.0, -100.0);

        let mut pass = small.search_pass();
        let err = big
            .closest_intersection_clipped(&ray, &max, &min, &mut pass)
            .unwrap_err();
        assert_eq!(
            err,
            BspError::PassMismatch {
                expected: big.node_count(),
                found: 1,
            }
        );
    }
}
