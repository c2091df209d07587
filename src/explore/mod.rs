mod filter;
mod render;
mod walk;

pub use filter::NameFilter;
pub use render::write_dir_tree;
pub use walk::{ExploreError, ExploreOptions, explore_dir_tree, resolve_root};
