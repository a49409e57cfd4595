//! Form primitives shared by every screen.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, TextArea};

mod label;
pub use label::Label;
