pub mod group;
pub mod view;

pub use group::{GroupedContacts, LetterGroup, group_by_letter};
pub use view::{combined_view, filter_by_query};
