#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    /// Maximum number of rows to return
    pub limit: u64,

    /// Number of rows to skip before returning any
    pub offset: Option<u64>,
}

impl Limit {
    pub fn new(limit: u64) -> Limit {
        Limit {
            limit,
            offset: None,
        }
    }
}

impl From<u64> for Limit {
    fn from(limit: u64) -> Self {
        Limit::new(limit)
    }
}
