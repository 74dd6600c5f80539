use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalValue(Decimal);

impl RentalValue {
    pub fn new(value: impl Into<Decimal>) -> Self {
        Self(value.into())
    }
}
