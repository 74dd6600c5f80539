use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DueOn(Date);

impl DueOn {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn is_before(&self, date: &Date) -> bool {
        self.0 < *date
    }

    pub fn is_after(&self, date: &Date) -> bool {
        self.0 > *date
    }
}
