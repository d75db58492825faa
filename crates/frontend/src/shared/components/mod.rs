pub mod form_row;
pub mod page_header;
pub mod ui;

pub use form_row::{FormButtons, FormRow};
pub use page_header::PageHeader;
