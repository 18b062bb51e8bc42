//! JWT token encoding, decoding, and claims management.
//!
//! Access and refresh tokens share one claims shape but are signed with
//! distinct secrets. All state lives in the token payload and signature;
//! nothing is stored server-side and verification is a pure computation.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::{JwtEncoder, SignedToken};
