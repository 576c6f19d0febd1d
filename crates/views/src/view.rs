//! View model trait for derived screen views.

/// A derived, read-only view model handed to the rendering layer.
///
/// View models are recomputed from (entities, screen state) on every change
/// and never mutated afterwards.
pub trait ViewModel {
    /// Returns the name of this view.
    fn name(&self) -> &'static str;

    /// Returns the number of entries this view shows.
    fn count(&self) -> usize;
}
