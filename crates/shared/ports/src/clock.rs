use plutus_core::Timestamp;

/// Port for time
///
/// Time enters the system in exactly three places: the `created_at` stamp
/// on an accepted request, the `computed_at` stamp on a cost result, and
/// the freshness check in the ADV cache. Routing all of them through this
/// port keeps re-computation byte-identical under a pinned clock.
pub trait Clock: Send + Sync {
    /// Current instant according to this clock
    fn now(&self) -> Timestamp;
}
