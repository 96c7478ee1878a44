//! Form domain layer
//!
//! Type-safe state of the post authoring form: text fields, selects,
//! publish-timing layout, submit buttons and multipart serialization.

mod field;
mod form_data;
mod post_form;
mod select;

pub use field::FormField;
pub use form_data::{FormData, FormValue, CSRF_FIELD};
pub use post_form::{FormFocus, FormMethod, FormTarget, PostForm, PublishMode, SubmitButton};
pub use select::{SelectField, SelectOption};
