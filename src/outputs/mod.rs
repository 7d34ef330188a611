pub mod composer;

pub use composer::{GpaReport, Outcome, ResponseComposer};
