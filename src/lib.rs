#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::invalid_codeblock_attributes)]

//! # kdnn
//!
//! A compact k-d tree for exact nearest-neighbour queries.
//!
//! The tree is built once from a batch of points — by recursive in-place
//! median selection, so it comes out balanced — and is read-only from
//! then on. Queries run a branch-and-bound search that prunes a node's
//! far subtree whenever the current best distance beats the squared
//! distance to the node's splitting plane. Exact distance ties are
//! broken by a lexicographic order on the points themselves, so query
//! results are fully deterministic, duplicates and all.
//!
//! ## Installation
//!
//! Add `kdnn` to `Cargo.toml`
//! ```toml
//! [dependencies]
//! kdnn = "0.3.0"
//! ```
//!
//! ## Usage
//! ```rust
//! use kdnn::KdTree;
//! use kdnn::distance::SquaredEuclidean;
//!
//! let points = vec![
//!     [1.0f64, 2.0, 5.0],
//!     [2.0, 3.0, 6.0],
//!     [3.0, 1.0, 4.0],
//! ];
//!
//! let tree: KdTree<f64, 3> = KdTree::new_from_slice(&points);
//!
//! assert_eq!(tree.size(), 3);
//!
//! let nearest = tree.nearest_one::<SquaredEuclidean>(&[1.0, 2.0, 5.1]).unwrap();
//!
//! assert_eq!(nearest.point, [1.0, 2.0, 5.0]);
//! assert!((nearest.distance - 0.01f64).abs() < f64::EPSILON);
//! ```

mod construction;
pub mod distance;
pub mod errors;
mod iter;
pub mod kdtree;
pub mod neighbour;
mod ordering;
mod query;
mod select;

pub use crate::distance::{Manhattan, SquaredEuclidean};
pub use crate::errors::Error;
pub use crate::iter::Iter;
pub use crate::kdtree::KdTree;
pub use crate::neighbour::Neighbour;
