mod diff;
mod intent;
mod panel;
mod reducer;
mod state;
mod view;

pub use diff::describe_diff;
pub use intent::HistoryIntent;
pub use panel::HistoryPanel;
pub use reducer::HistoryReducer;
pub use state::{EditDraft, PanelSelectionState};
pub use view::{
    entry_lines, history_items, plain_text, render_history, AFFORDANCE_HINT, COMMENT_ADDED_LABEL,
    CREATED_LABEL,
};
