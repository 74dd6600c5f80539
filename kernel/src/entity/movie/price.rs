use error_stack::Report;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "Decimal")]
pub struct MoviePrice(Decimal);

impl MoviePrice {
    pub fn new(price: impl Into<Decimal>) -> error_stack::Result<Self, KernelError> {
        let price = price.into();
        if price < Decimal::ZERO {
            return Err(Report::new(KernelError::InvalidPrice)
                .attach_printable(format!("Negative movie price: {price}")));
        }
        Ok(Self(price))
    }
}

impl TryFrom<Decimal> for MoviePrice {
    type Error = Report<KernelError>;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
