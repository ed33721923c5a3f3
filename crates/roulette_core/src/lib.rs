//! Topic roulette core: pure state machine and view-model helpers.
mod defaults;
mod edit;
mod effect;
mod msg;
mod spin;
mod state;
mod topics;
mod update;
mod view_model;

pub use defaults::default_topics;
pub use edit::EditBuffer;
pub use effect::Effect;
pub use msg::Msg;
pub use spin::{pick_index, Spin, SpinId, SpinState, SpinTiming};
pub use state::{AppState, ManagerState};
pub use topics::TopicList;
pub use update::update;
pub use view_model::{AppViewModel, EditView, ManagerView, SpinView};
