//! Routed Pages

mod create;
mod detail;
mod list;
mod not_found;

pub use create::CreateView;
pub use detail::DetailView;
pub use list::ListView;
pub use not_found::NotFoundView;
