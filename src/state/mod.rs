//! Application state module

mod app_state;
mod author_filter;
mod entry;
mod forms;
mod modal;
mod page;
mod tables;

pub use app_state::*;
pub use author_filter::AuthorFilter;
pub use entry::*;
pub use forms::*;
pub use modal::*;
pub use page::*;
pub use tables::*;
