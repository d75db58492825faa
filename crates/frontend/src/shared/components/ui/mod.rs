pub mod button;
pub mod text_field;
pub mod toggle;

pub use button::Button;
pub use text_field::TextField;
pub use toggle::Toggle;
