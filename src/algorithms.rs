/*!
Structural transforms written purely against [`Path`](crate::path::Path)
and [`PathBuilder`](crate::builder::PathBuilder), so they work the same
over any representation.

Results are always assembled as a
[`LinkedPath`](crate::linkedpath::LinkedPath), since appending to it
costs O(1) however long the output grows.
*/

mod squash;

pub use self::squash::{assemble_path, expand_nodes, squash_nodes};
