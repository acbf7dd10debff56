// Standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod textarea;

// Primitive wrappers
pub mod toast;

// Depends on button
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use textarea::*;
pub use toast::*;
