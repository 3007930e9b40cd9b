//! Widget style functions with theme support.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export radius constants
pub use shadows::radius;

// Re-export container styles
pub use containers::{
    badge_default_style, badge_productive_style, card_style, header_style, step_active_style,
    step_inactive_style, toast_style,
};

// Re-export button styles
pub use buttons::{ghost_button_style, primary_button_style, secondary_button_style};

// Re-export input styles
pub use inputs::scrollable_style;
