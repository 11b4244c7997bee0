pub mod sandbox;
pub mod token;
