//! Base trait for the snapshots reducers produce.

/// Marker trait for the card-list and counter states.
///
/// A state is everything one pane of the screen needs to draw itself: the
/// card list keeps its three collections plus the search term, the counter
/// keeps its count. Engines hold one state and swap it for the value the
/// reducer returns; `Default` is what they leave behind while the reducer
/// owns the old one.
pub trait UiState: Clone + PartialEq + Default {}
