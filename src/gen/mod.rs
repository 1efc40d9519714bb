pub mod attack;
pub mod lines;
pub mod magic;
