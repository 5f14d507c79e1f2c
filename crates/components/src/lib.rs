//! Joinery Components
//!
//! Typed wrappers around the Joinery CSS layout primitives. Each primitive
//! maps its props to the class and `data-*` attributes the matching
//! stylesheet targets and renders a single element; there is no other
//! behaviour.
//!
//! # Examples
//!
//! ```
//! use joinery_components::{Grid, GridGap, Primitive, Stack, StackGap};
//!
//! let cards = Grid::new().min_width("18rem").gap(GridGap::Related);
//! let page = Stack::new().gap(StackGap::Section).as_tag("main");
//!
//! let html = page.render(&cards.render("<p>card</p>"));
//! assert_eq!(
//!     html,
//!     r#"<main class="stack" data-gap="section"><div class="grid" data-gap="related" style="--joinery-grid-min: 18rem"><p>card</p></div></main>"#
//! );
//! ```

pub mod attributes;
pub mod box_element;
pub mod center;
pub mod cluster;
pub mod element;
pub mod grid;
pub mod stack;

pub use attributes::{escape_html, Attributes};
pub use box_element::{Border, BoxElement, BoxPattern, Padding};
pub use center::{Center, Gutters, Measure};
pub use cluster::{Cluster, ClusterAlign, ClusterGap, ClusterPattern, Justify};
pub use element::{ElementProps, Primitive, DEFAULT_TAG};
pub use grid::{Cols, Grid, GridAlign, GridGap, GridMin, GRID_MIN_PROPERTY};
pub use stack::{SplitAfter, Stack, StackGap};
