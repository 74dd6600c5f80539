use std::num::NonZeroU32;

use error_stack::Report;
use kernel::prelude::entity::{DueOn, Movie, RentalValue, RentedOn};
use kernel::KernelError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use time::{Date, Duration, Weekday};

/// Share of the unit price charged for the movie at each list position.
/// Positions past the end of the table pay full price again.
const PRICE_RATE_BY_POSITION: [Decimal; 6] = [
    dec!(1.0),
    dec!(1.0),
    dec!(1.0),
    dec!(0.75),
    dec!(0.5),
    dec!(0.0),
];

pub fn rental_value(movies: &[Movie]) -> RentalValue {
    let total = movies
        .iter()
        .enumerate()
        .map(|(position, movie)| {
            let rate = PRICE_RATE_BY_POSITION
                .get(position)
                .copied()
                .unwrap_or(Decimal::ONE);
            let price: &Decimal = movie.price().as_ref();
            price * rate
        })
        .sum::<Decimal>();
    RentalValue::new(total)
}

/// Next day, or the Monday after when the next day is a Sunday.
pub fn due_date(rented_on: &RentedOn) -> error_stack::Result<DueOn, KernelError> {
    let mut due = next_day(*rented_on.as_ref())?;
    if due.weekday() == Weekday::Sunday {
        due = next_day(due)?;
    }
    Ok(DueOn::new(due))
}

// TODO: derive the daily rate from the discount table instead of the whole rental value
pub fn extended_value(current: &RentalValue, days: NonZeroU32) -> RentalValue {
    let rate: &Decimal = current.as_ref();
    RentalValue::new(rate * Decimal::from(days.get()))
}

pub fn extended_due_date(
    rented_on: &RentedOn,
    days: NonZeroU32,
) -> error_stack::Result<DueOn, KernelError> {
    let rented_on: &Date = rented_on.as_ref();
    rented_on
        .checked_add(Duration::days(i64::from(days.get())))
        .map(DueOn::new)
        .ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("Cannot extend rental by {days} days"))
        })
}

fn next_day(date: Date) -> error_stack::Result<Date, KernelError> {
    date.next_day().ok_or_else(|| {
        Report::new(KernelError::Internal).attach_printable(format!("No day after {date}"))
    })
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU32;

    use kernel::prelude::entity::{Movie, MoviePrice, MovieStock, MovieTitle, RentalValue, RentedOn};
    use kernel::KernelError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::macros::date;
    use time::Weekday;

    use crate::policy::{due_date, extended_due_date, extended_value, rental_value};

    fn movies(count: usize, price: Decimal) -> error_stack::Result<Vec<Movie>, KernelError> {
        (0..count)
            .map(|i| -> error_stack::Result<Movie, KernelError> {
                Ok(Movie::new(
                    MovieTitle::new(format!("movie {i}")),
                    MovieStock::new(2u32),
                    MoviePrice::new(price)?,
                ))
            })
            .collect()
    }

    #[test]
    fn single_movie_is_full_price() -> error_stack::Result<(), KernelError> {
        assert_eq!(rental_value(&movies(1, dec!(4.0))?).as_ref(), &dec!(4.0));
        Ok(())
    }

    #[test]
    fn no_discount_up_to_third_movie() -> error_stack::Result<(), KernelError> {
        assert_eq!(rental_value(&movies(3, dec!(4.0))?).as_ref(), &dec!(12.0));
        Ok(())
    }

    #[test]
    fn fourth_movie_at_three_quarters() -> error_stack::Result<(), KernelError> {
        assert_eq!(rental_value(&movies(4, dec!(4.0))?).as_ref(), &dec!(15.0));
        Ok(())
    }

    #[test]
    fn fifth_movie_at_half() -> error_stack::Result<(), KernelError> {
        assert_eq!(rental_value(&movies(5, dec!(5.0))?).as_ref(), &dec!(19.25));
        Ok(())
    }

    #[test]
    fn sixth_movie_is_free() -> error_stack::Result<(), KernelError> {
        assert_eq!(rental_value(&movies(6, dec!(4.0))?).as_ref(), &dec!(17.0));
        Ok(())
    }

    #[test]
    fn full_price_after_sixth() -> error_stack::Result<(), KernelError> {
        assert_eq!(rental_value(&movies(7, dec!(4.0))?).as_ref(), &dec!(21.0));
        assert_eq!(rental_value(&movies(8, dec!(4.0))?).as_ref(), &dec!(25.0));
        Ok(())
    }

    #[test]
    fn discount_follows_position_not_price() -> error_stack::Result<(), KernelError> {
        let mut list = movies(3, dec!(4.0))?;
        list.push(Movie::new(
            MovieTitle::new("expensive"),
            MovieStock::new(1u32),
            MoviePrice::new(dec!(10.0))?,
        ));
        assert_eq!(rental_value(&list).as_ref(), &dec!(19.5));
        Ok(())
    }

    #[test]
    fn due_next_day_on_weekdays() -> error_stack::Result<(), KernelError> {
        let monday = RentedOn::new(date!(2021 - 11 - 15));
        assert_eq!(due_date(&monday)?.as_ref(), &date!(2021 - 11 - 16));
        let friday = RentedOn::new(date!(2021 - 11 - 19));
        assert_eq!(due_date(&friday)?.as_ref(), &date!(2021 - 11 - 20));
        let sunday = RentedOn::new(date!(2021 - 11 - 21));
        assert_eq!(due_date(&sunday)?.as_ref(), &date!(2021 - 11 - 22));
        Ok(())
    }

    #[test]
    fn saturday_rental_due_on_monday() -> error_stack::Result<(), KernelError> {
        let saturday = RentedOn::new(date!(2021 - 11 - 20));
        let due = due_date(&saturday)?;
        assert_eq!(due.as_ref().weekday(), Weekday::Monday);
        assert_eq!(due.as_ref(), &date!(2021 - 11 - 22));
        Ok(())
    }

    #[test]
    fn extension_is_flat_rate() -> error_stack::Result<(), KernelError> {
        let days = NonZeroU32::new(3).ok_or(KernelError::Internal)?;
        let value = extended_value(&RentalValue::new(dec!(4.0)), days);
        assert_eq!(value.as_ref(), &dec!(12.0));

        let due = extended_due_date(&RentedOn::new(date!(2021 - 11 - 15)), days)?;
        assert_eq!(due.as_ref(), &date!(2021 - 11 - 18));
        Ok(())
    }
}
