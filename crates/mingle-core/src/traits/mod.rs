//! Traits behind which external collaborators sit.
//!
//! The session core never talks to a database or a mail gateway directly;
//! it sees these capabilities only through the traits defined here.

pub mod credentials;
pub mod mailer;

pub use credentials::CredentialStore;
pub use mailer::ResetMailer;
