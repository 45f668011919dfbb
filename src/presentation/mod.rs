mod components;
mod view;

pub use view::{ModalRender, UiContext, draw};
