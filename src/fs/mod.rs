//! Filesystem utilities: creating and searching paths under candidate directories.
//!
//! Provides [`create_path`] and [`search_file`], which back every category accessor of
//! [`BaseDirectories`](crate::BaseDirectories), and the [`PathExt`] extension trait for
//! [`Path`](std::path::Path) they are built on.

mod lookup;
pub mod path_ext;

pub use lookup::{create_path, search_file};
pub use path_ext::{MkdirOptions, PathExt};
