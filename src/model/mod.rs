mod selection;

pub use selection::{SavedState, SelectionType};
