//! Common reusable UI components shared by the page sections

pub mod button;
pub mod card;
pub mod form;
pub mod message;
pub mod pill;
pub mod tooltip;
pub mod visually_hidden;

pub use button::{ButtonSize, ButtonVariant, CtaButton, SubmitButton};
pub use card::Card;
pub use form::{FormField, TextAreaField};
pub use message::{ConfigurationError, ErrorMessage, SuccessMessage};
pub use pill::Pill;
pub use tooltip::{Tooltip, TooltipPosition};
pub use visually_hidden::VisuallyHidden;
