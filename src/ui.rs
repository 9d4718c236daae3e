mod image_view;
mod main;
mod sidebar;
mod toolbar;

pub use main::theme;
