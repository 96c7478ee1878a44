//! Form views

mod field_renderer;
mod post_form;

pub use post_form::draw_post_form;
