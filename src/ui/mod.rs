/// UI layer: panels plus the three linked chart views.
///
/// Each view draws from the shared derived state and feeds gestures back
/// through the selection entry points on `AppState`; the views never talk
/// to each other.
pub mod bar;
pub mod distribution;
pub mod panels;
pub mod scatter;
