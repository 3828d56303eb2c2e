//! Drug interaction checking.

use crate::models::InteractionResult;

/// Evaluates a list of medicines for pairwise interactions.
///
/// Must accept any number of names, including zero, and never fail on
/// unknown names.
pub trait InteractionChecker: Send + Sync {
    fn check_interactions(&self, medicines: &[String]) -> InteractionResult;
}

/// Checker with no interaction rules; every list is reported clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInteractionChecker;

impl InteractionChecker for NoInteractionChecker {
    fn check_interactions(&self, medicines: &[String]) -> InteractionResult {
        tracing::debug!(count = medicines.len(), "Interaction rules not configured");
        InteractionResult::none_found()
    }
}
