//! Built-in semantic rules.
//!
//! One rule per file. [`builtins`] returns them in the order the linter
//! runs them: needs, stage, extends, circular-extends. The order is part
//! of the result contract, so it lives here rather than in a registry.

pub mod circular_extends;
pub mod undefined_extends;
pub mod undefined_needs;
pub mod undefined_stage;

pub use circular_extends::CircularExtendsRule;
pub use undefined_extends::UndefinedExtendsRule;
pub use undefined_needs::UndefinedNeedsRule;
pub use undefined_stage::UndefinedStageRule;

use super::rule::SemanticRule;

/// All built-in rules, in execution order.
pub fn builtins() -> Vec<Box<dyn SemanticRule>> {
    vec![
        Box::new(UndefinedNeedsRule),
        Box::new(UndefinedStageRule),
        Box::new(UndefinedExtendsRule),
        Box::new(CircularExtendsRule),
    ]
}
