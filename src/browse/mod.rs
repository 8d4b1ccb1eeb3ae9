pub mod controller;
pub mod intent;
pub mod state;

pub use controller::{reduce, BrowseController, BrowseHandle};
pub use intent::{BrowseIntent, FetchEffect, FetchKind};
pub use state::{BrowseState, DisplayMode, PAGE_SIZE};
