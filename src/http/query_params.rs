use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LimitQueryParam {
    pub limit: Option<usize>,
}

impl LimitQueryParam {
    /// The requested limit, or `default`, capped at `max`.
    pub fn or(&self, default: usize, max: usize) -> usize {
        self.limit.unwrap_or(default).min(max)
    }
}
