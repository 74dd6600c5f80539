use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieStock(u32);

impl MovieStock {
    pub fn new(stock: impl Into<u32>) -> Self {
        Self(stock.into())
    }

    pub fn is_available(&self) -> bool {
        self.0 > 0
    }
}
