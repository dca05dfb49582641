pub mod reports;
pub mod tester;

pub use tester::{LogicTester, ScenarioResult};
