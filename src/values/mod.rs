//! Immutable value objects aggregated by an [`Advertisement`](crate::Advertisement).
//!
//! Each object validates its fields at construction and exposes its flat wire
//! representation through `to_value`/`from_value`.

pub mod contact;
pub mod location;
pub mod recruiter;
pub mod salary;
pub mod standout;
pub mod template;
pub mod third_parties;
pub mod video;

pub use contact::Contact;
pub use location::Location;
pub use recruiter::Recruiter;
pub use salary::Salary;
pub use standout::StandOut;
pub use template::{Template, TemplateItem};
pub use third_parties::ThirdParties;
pub use video::Video;
