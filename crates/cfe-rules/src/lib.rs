pub mod classify;
pub mod error;
pub mod lint;
pub mod resolve;
pub mod ruleset;

pub use classify::{FieldClass, classify};
pub use error::{Result, RuleError};
pub use lint::{LintCode, LintReport, LintWarning, lint};
pub use resolve::{StateSnapshot, resolve_visible};
pub use ruleset::{Condition, ConditionalRule, RuleSet};
