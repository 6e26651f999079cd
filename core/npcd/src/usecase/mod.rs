//! ユースケース層

pub mod decision;

pub use decision::{Decision, DecisionService, HealthSnapshot};
