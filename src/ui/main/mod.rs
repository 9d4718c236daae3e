// Submodules for main UI functionality
pub mod keyboard_input;
pub mod main_ui;
pub mod slideshow;
pub mod statusbar;
pub mod theme;
