pub mod request;

pub use request::{FormResponse, FormSubmission};
