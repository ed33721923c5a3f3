#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpinView {
    #[default]
    Idle,
    Spinning {
        display_candidate: String,
        elapsed_ms: u64,
    },
    Settled {
        result: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditView {
    pub index: usize,
    pub draft: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManagerView {
    pub open: bool,
    pub selected: usize,
    pub new_topic_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub spin: SpinView,
    pub topics: Vec<String>,
    pub topic_count: usize,
    pub can_spin: bool,
    pub edit: Option<EditView>,
    pub manager: ManagerView,
    pub dirty: bool,
}
