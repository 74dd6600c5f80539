mod due_on;
mod id;
mod rented_on;
mod value;

pub use self::{due_on::*, id::*, rented_on::*, value::*};
use destructure::{Destructure, Mutation};
use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;
use vodca::References;

use crate::entity::{Customer, Movie};
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Rental {
    id: RentalId,
    customer: Customer,
    movies: Vec<Movie>,
    rented_on: RentedOn,
    due_on: DueOn,
    value: RentalValue,
}

impl Rental {
    pub fn new(
        id: RentalId,
        customer: Customer,
        movies: Vec<Movie>,
        rented_on: RentedOn,
        due_on: DueOn,
        value: RentalValue,
    ) -> error_stack::Result<Self, KernelError> {
        if movies.is_empty() {
            let id: &Uuid = id.as_ref();
            return Err(Report::new(KernelError::MovieListRequired)
                .attach_printable(format!("Rental {id} has no movies")));
        }
        let rented: &Date = rented_on.as_ref();
        if !due_on.is_after(rented) {
            let due: &Date = due_on.as_ref();
            return Err(Report::new(KernelError::InvalidDueDate)
                .attach_printable(format!("Due on {due}, rented on {rented}")));
        }
        Ok(Self {
            id,
            customer,
            movies,
            rented_on,
            due_on,
            value,
        })
    }

    /// Overdue is never stored; it only depends on the due date and the day it is asked on.
    pub fn is_overdue(&self, today: &Date) -> bool {
        self.due_on.is_before(today)
    }
}
