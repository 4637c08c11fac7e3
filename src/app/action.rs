use crate::store::StoreAction;

/// Side effects requested by the event handler, applied by
/// [`AppState::apply`](crate::app::state::AppState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Store(StoreAction),
    Quit,
}
