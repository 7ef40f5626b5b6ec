// UI module organization
// Each submodule draws one part of the window and reports what the user asked for as UiEvents

pub mod alert;
pub mod image_panel;
pub mod input;
pub mod overlays;
pub mod settings_window;
pub mod status_bar;
pub mod toolbar;

pub use alert::show_alert;
pub use image_panel::render_central_panel;
pub use input::handle_keyboard_input;
pub use settings_window::show_settings_window;
pub use status_bar::render_status_bar;
pub use toolbar::render_toolbar;
