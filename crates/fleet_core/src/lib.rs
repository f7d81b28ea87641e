pub mod catalog;
pub mod ranking;
pub mod team;
pub mod types;

// Re-export the data model (not strategy-specific)
pub use catalog::*;
pub use ranking::*;
pub use team::*;
pub use types::*;

// =============================================================================
// Strategy trait implemented by the greedy and exact purchase strategies
// =============================================================================

/// Trait that all purchase strategies must implement.
///
/// A strategy chooses which catalog rows to buy so that the total score is
/// as high as it can find while the total cost stays within the budget.
/// Each row may be bought at most once per call.
pub trait PurchaseStrategy {
    /// Select items to buy.
    ///
    /// # Arguments
    /// * `budget` - The spendable amount
    /// * `items` - The sponsor's catalog rows, in catalog order
    ///
    /// # Returns
    /// The purchased items and the budget left over. The total cost of the
    /// returned items never exceeds `budget`.
    fn select(&self, budget: u64, items: &[CatalogItem]) -> Purchase;

    /// Short identifier used in configs and logs
    fn name(&self) -> &str;
}
