//! Culling: local search that drops redundant members of a removal set.
//!
//! A pass walks a cursor over the working set. At each step it asks the
//! [`Oracle`] whether the set minus the element under the cursor is still
//! feasible. If so the element is dropped and the next one slides under the
//! cursor; otherwise the cursor advances. A pass makes at most as many
//! attempts as the set had members when the pass started.
//!
//! Dropping a late element can make an earlier one redundant, which a single
//! pass never revisits. [`CullMode::Fixpoint`] repeats passes until one drops
//! nothing.

use tracing::{debug, info};

use crate::oracle::Oracle;

/// How many culling passes to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CullMode {
    /// One bounded pass (default).
    #[default]
    SinglePass,
    /// Repeat passes until a pass drops nothing.
    Fixpoint,
}

/// Returns a subset of `removal` produced by culling under `oracle`.
///
/// The result never grows, keeps the input order of surviving members, and
/// stays feasible whenever the input was feasible.
pub fn cull(oracle: &Oracle<'_>, removal: &[String], mode: CullMode) -> Vec<String> {
    let mut working = removal.to_vec();
    if working.is_empty() {
        return working;
    }

    let mut passes = 0usize;
    loop {
        let dropped = cull_pass(oracle, &mut working);
        passes += 1;
        debug!(pass = passes, dropped, remaining = working.len(), "cull pass finished");
        if dropped == 0 || mode == CullMode::SinglePass {
            break;
        }
    }

    info!(
        before = removal.len(),
        after = working.len(),
        passes,
        "removal set culled"
    );
    working
}

/// Runs one bounded pass over `working`, returning how many members were
/// dropped.
fn cull_pass(oracle: &Oracle<'_>, working: &mut Vec<String>) -> usize {
    let budget = working.len();
    let mut cursor = 0;
    let mut attempts = 0;
    let mut dropped = 0;

    while attempts < budget && cursor < working.len() {
        if oracle.is_feasible_without(working, cursor) {
            working.remove(cursor);
            dropped += 1;
        } else {
            cursor += 1;
        }
        attempts += 1;
    }
    dropped
}
