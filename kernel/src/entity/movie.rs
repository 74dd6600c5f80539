mod price;
mod stock;
mod title;

pub use self::{price::*, stock::*, title::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Movie {
    title: MovieTitle,
    stock: MovieStock,
    price: MoviePrice,
}

impl Movie {
    pub fn new(title: MovieTitle, stock: MovieStock, price: MoviePrice) -> Self {
        Self {
            title,
            stock,
            price,
        }
    }
}
