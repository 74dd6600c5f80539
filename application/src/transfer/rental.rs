use std::num::NonZeroU32;

use error_stack::Report;
use kernel::prelude::entity::{
    Customer, DestructRental, DueOn, Movie, Rental, RentalId, RentalValue, RentedOn,
};
use kernel::KernelError;
use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;

use crate::transfer::{CustomerDto, MovieDto};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentalDto {
    pub id: Uuid,
    pub customer: CustomerDto,
    pub movies: Vec<MovieDto>,
    pub rented_on: Date,
    pub due_on: Date,
    pub value: Decimal,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            customer,
            movies,
            rented_on,
            due_on,
            value,
        } = value.into_destruct();
        Self {
            id: id.into(),
            customer: customer.into(),
            movies: movies.into_iter().map(MovieDto::from).collect(),
            rented_on: rented_on.into(),
            due_on: due_on.into(),
            value: value.into(),
        }
    }
}

impl TryFrom<RentalDto> for Rental {
    type Error = Report<KernelError>;

    fn try_from(value: RentalDto) -> Result<Self, Self::Error> {
        let movies = value
            .movies
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<Movie>, Report<KernelError>>>()?;
        Rental::new(
            RentalId::new(value.id),
            Customer::from(value.customer),
            movies,
            RentedOn::new(value.rented_on),
            DueOn::new(value.due_on),
            RentalValue::new(value.value),
        )
    }
}

/// Both fields are optional so a missing customer or movie list is reported
/// as a rejection instead of being impossible to express.
#[derive(Debug, Clone, Default)]
pub struct RentMoviesDto {
    pub customer: Option<CustomerDto>,
    pub movies: Option<Vec<MovieDto>>,
}

#[derive(Debug, Clone)]
pub struct ExtendRentalDto {
    pub rental: RentalDto,
    pub days: NonZeroU32,
}
