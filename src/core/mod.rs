pub mod lemma;
pub mod rotator;
pub mod session;
pub mod types;
