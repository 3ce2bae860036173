pub mod mines;
pub mod panels;
pub mod recipe;

pub use mines::Board;
pub use panels::PanelRegistry;
pub use recipe::RecipeDraft;
