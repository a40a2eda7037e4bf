pub use mvi::{fold, Intent, Reducer, UiState};
