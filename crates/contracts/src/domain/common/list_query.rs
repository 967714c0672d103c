use serde::Serialize;

/// Query for one server-side page of a status-filtered list.
///
/// Pages are 1-based; `None` status means "all statuses".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery<S> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<S>,
    pub page: usize,
}

impl<S> ListQuery<S> {
    pub fn new(status: Option<S>, page: usize) -> Self {
        Self {
            status,
            page: page.max(1),
        }
    }
}
