pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DB_PATH_ENV, home_dir, resolve_db_path};
pub use paths::format_path_with_tilde;
pub use terminal::sanitize_label;
