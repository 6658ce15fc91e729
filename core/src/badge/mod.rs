pub mod assembler;
pub mod schemas;
pub mod verify_url;
