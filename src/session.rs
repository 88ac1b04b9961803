/// Read-only identity handed to every component that talks to the per-user
/// API endpoints. Nothing in the app mutates it; tests inject a fake one.
#[derive(Debug, Clone)]
pub(crate) struct CurrentUser {
    id: String,
}

impl CurrentUser {
    pub(crate) fn new(id: String) -> Self {
        Self { id }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }
}
