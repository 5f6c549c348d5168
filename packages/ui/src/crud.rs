/// Whether a management screen's modal editor is creating a new entity or
/// updating an existing one. Decides which request `save` dispatches and
/// which fields are mandatory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

impl EditorMode {
    pub fn is_create(&self) -> bool {
        matches!(self, EditorMode::Create)
    }
}
