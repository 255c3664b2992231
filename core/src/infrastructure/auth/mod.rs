pub mod hosted_jwt;

pub use hosted_jwt::HostedJwtVerifier;
