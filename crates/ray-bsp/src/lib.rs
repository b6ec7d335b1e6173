//! Loose BSP tree for closest-hit ray queries over bounded 3D objects.

mod aabb;
pub mod bsp;
mod config;
mod cuboid;
mod error;
mod intersection;
mod object;
mod ray;
mod sphere;
mod triangle;

pub use aabb::{Aabb, Axis};
pub use bsp::{BspNode, BspTree, NodeId, NodeKind, SearchPass, TreeDump, TreeStats};
pub use config::{BuildConfig, MAX_AXIS_RETRIES, MIN_OBJECT_COUNT};
pub use cuboid::Cuboid;
pub use error::{BspError, Result};
pub use intersection::Intersection;
pub use object::{Object, ObjectId, HIT_EPSILON};
pub use ray::Ray;
pub use sphere::Sphere;
pub use triangle::Triangle;
