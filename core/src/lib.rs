pub mod badge;
pub mod determinism;
pub mod inputs;
pub mod progress;
pub mod report;
pub mod validator;
pub mod verifier;

pub mod error;
