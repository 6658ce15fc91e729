pub mod canonical;
pub mod fingerprint;
