pub mod job_application;
pub mod onboarding;
pub mod user_profile;

// Re-export job_application surveys
pub use job_application::{JOB_APPLICATION_TITLE, job_application};

// Re-export onboarding fixture
pub use onboarding::{ONBOARDING_FILE_NAME, ONBOARDING_JSON, onboarding};

// Re-export user_profile surveys
pub use user_profile::user_profile;
