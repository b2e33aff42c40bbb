pub mod navigation;
pub mod selection;
pub mod ui;

pub use navigation::NavigationState;
pub use selection::SelectionState;
pub use ui::UIState;
