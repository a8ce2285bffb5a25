// Form primitives
pub mod button;
pub mod form_select;
pub mod input;
pub mod textarea;

// Containers and overlays
pub mod alert_dialog;
pub mod card;

// Re-exports for convenience
pub use alert_dialog::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use textarea::*;
