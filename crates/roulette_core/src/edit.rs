/// Single-slot draft for the topic being edited.
///
/// Starting a new edit replaces whatever draft was in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditBuffer {
    #[default]
    Empty,
    Editing { index: usize, draft: String },
}

impl EditBuffer {
    pub fn start(&mut self, index: usize, text: &str) {
        *self = EditBuffer::Editing {
            index,
            draft: text.to_string(),
        };
    }

    pub fn set_draft(&mut self, text: String) -> bool {
        match self {
            EditBuffer::Editing { draft, .. } => {
                *draft = text;
                true
            }
            EditBuffer::Empty => false,
        }
    }

    pub fn clear(&mut self) {
        *self = EditBuffer::Empty;
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            EditBuffer::Editing { index, .. } => Some(*index),
            EditBuffer::Empty => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditBuffer::Editing { draft, .. } => Some(draft),
            EditBuffer::Empty => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditBuffer::Editing { .. })
    }

    /// Keeps the draft pointing at the same topic after `removed` was deleted.
    pub(crate) fn on_topic_removed(&mut self, removed: usize) {
        if let EditBuffer::Editing { index, .. } = self {
            if *index == removed {
                self.clear();
            } else if *index > removed {
                *index -= 1;
            }
        }
    }
}
