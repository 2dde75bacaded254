//! Circular `extends` detection.
//!
//! Builds the directed graph induced by `extends` edges over the job
//! universe and reports every cycle, self-loops included.

use std::collections::HashMap;

use serde_yaml::Mapping;

use crate::lint::diagnostic::{Category, LintError};
use crate::lint::jobs::JobUniverse;
use crate::lint::refs::extends_targets;
use crate::lint::rule::SemanticRule;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    InProgress,
    Done,
}

struct Frame<'a> {
    node: &'a str,
    targets: Vec<&'a str>,
    next: usize,
}

impl<'a> Frame<'a> {
    fn new(node: &'a str, universe: &JobUniverse<'a>) -> Self {
        let targets = universe.get(node).map(extends_targets).unwrap_or_default();
        Self {
            node,
            targets,
            next: 0,
        }
    }
}

/// Detects cycles in the `extends` graph.
///
/// Depth-first traversal with an explicit stack and in-progress/done
/// marking, so pathological extends chains cannot overflow the call
/// stack. Unresolved targets contribute no edges (they are reported by
/// the extends reference check). Roots are visited in document order,
/// which makes the output deterministic; each cycle is reported once and
/// traversal continues so independent cycles all surface. Diamond-shaped
/// graphs reach shared ancestors only after they are marked done and
/// produce no error.
pub struct CircularExtendsRule;

impl SemanticRule for CircularExtendsRule {
    fn category(&self) -> Category {
        Category::CircularExtends
    }

    fn name(&self) -> &str {
        "Circular Extends"
    }

    fn description(&self) -> &str {
        "Detects cycles in extends chains"
    }

    fn check(&self, _doc: &Mapping, universe: &JobUniverse<'_>) -> Vec<LintError> {
        let mut errors = Vec::new();
        let mut color: HashMap<&str, Color> = HashMap::new();

        for (root, _) in universe.iter() {
            if color.contains_key(root) {
                continue;
            }

            let mut stack = vec![Frame::new(root, universe)];
            color.insert(root, Color::InProgress);

            while let Some(frame) = stack.last_mut() {
                if frame.next >= frame.targets.len() {
                    color.insert(frame.node, Color::Done);
                    stack.pop();
                    continue;
                }
                let target = frame.targets[frame.next];
                frame.next += 1;

                if !universe.contains(target) {
                    continue;
                }
                match color.get(target).copied() {
                    Some(Color::InProgress) => {
                        errors.push(LintError::new(
                            self.category(),
                            format!(
                                "Circular dependency detected in 'extends': {}",
                                cycle_path(&stack, target)
                            ),
                        ));
                    }
                    Some(Color::Done) => {}
                    None => {
                        color.insert(target, Color::InProgress);
                        stack.push(Frame::new(target, universe));
                    }
                }
            }
        }

        errors
    }
}

/// Render the cycle closing at `target` from the in-progress stack.
fn cycle_path(stack: &[Frame<'_>], target: &str) -> String {
    let start = stack
        .iter()
        .position(|frame| frame.node == target)
        .unwrap_or(0);
    let mut path: Vec<&str> = stack[start..].iter().map(|frame| frame.node).collect();
    path.push(target);
    path.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(yaml: &str) -> Vec<LintError> {
        let doc: Mapping = serde_yaml::from_str(yaml).unwrap();
        let universe = JobUniverse::classify(&doc);
        CircularExtendsRule.check(&doc, &universe)
    }

    #[test]
    fn detects_self_loop() {
        let errors = check("a:\n  extends: a\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, Category::CircularExtends);
        assert!(errors[0].message.contains("a -> a"));
    }

    #[test]
    fn detects_two_node_cycle() {
        let errors = check("a:\n  extends: b\nb:\n  extends: a\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("a -> b -> a"));
    }

    #[test]
    fn detects_three_node_cycle() {
        let errors = check("a:\n  extends: b\nb:\n  extends: c\nc:\n  extends: a\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("a -> b -> c -> a"));
    }

    #[test]
    fn valid_chain_produces_no_error() {
        let errors = check(".base:\n  script: echo\nmid:\n  extends: .base\ntop:\n  extends: mid\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        // a extends b and c, both extend d.
        let errors = check(
            "a:\n  extends: [b, c]\nb:\n  extends: d\nc:\n  extends: d\nd:\n  script: echo\n",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn independent_cycles_each_reported() {
        let errors = check(
            "a:\n  extends: b\nb:\n  extends: a\nx:\n  extends: y\ny:\n  extends: x\n",
        );
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("a -> b -> a"));
        assert!(errors[1].message.contains("x -> y -> x"));
    }

    #[test]
    fn cycle_reported_once_regardless_of_entry() {
        // b and c both sit on the same cycle; only the first root in
        // document order reports it.
        let errors = check("b:\n  extends: c\nc:\n  extends: b\nd:\n  extends: b\n");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unresolved_target_is_not_an_edge() {
        let errors = check("a:\n  extends: missing\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn cycle_through_hidden_templates() {
        let errors = check(".a:\n  extends: .b\n.b:\n  extends: .a\n");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        // First job in document order sits at the top of the chain, so
        // the traversal stack reaches the full depth.
        let mut yaml = String::new();
        for i in 0..5000 {
            yaml.push_str(&format!("job{i}:\n  extends: job{}\n", i + 1));
        }
        yaml.push_str("job5000:\n  script: echo\n");
        let errors = check(&yaml);
        assert!(errors.is_empty());
    }
}
