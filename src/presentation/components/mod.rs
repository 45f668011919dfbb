mod body;
mod footer;
mod layout;
mod modal;

pub use body::render_body;
pub use footer::render_footer;
pub use modal::render_modal;
