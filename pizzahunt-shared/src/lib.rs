pub mod pii;
pub mod text;

pub use pii::Masked;
pub use text::{collapse_text, strip_html};
