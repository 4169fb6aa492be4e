pub mod wiener;

pub use wiener::{Convergent, WienerAttack, WienerAttackOutcome};
