//! Configuration sources, applied in precedence order by the loader.

pub(crate) mod environment;
pub(crate) mod global_file;
pub(crate) mod workspace_file;
