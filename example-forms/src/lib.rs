pub mod page;
pub mod sign_in;
pub mod sign_up;
pub mod submission;

// Re-export page types
pub use page::Page;

// Re-export sign_in types
pub use sign_in::{sign_in_form, sign_in_layout};

// Re-export sign_up types
pub use sign_up::{sign_up_form, sign_up_layout};

// Re-export submission helpers
pub use submission::{log_submission, mask_secrets};
