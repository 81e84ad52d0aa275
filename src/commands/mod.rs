pub mod config;
pub mod context;
pub mod coords;
pub mod init;
pub mod render;
pub mod themes;

pub use config::run_config;
pub use coords::run_coords;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::run_render;
pub use themes::{format_themes, run_themes};
