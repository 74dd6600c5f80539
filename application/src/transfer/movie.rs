use error_stack::Report;
use kernel::prelude::entity::{DestructMovie, Movie, MoviePrice, MovieStock, MovieTitle};
use kernel::KernelError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MovieDto {
    pub title: String,
    pub stock: u32,
    pub price: Decimal,
}

impl From<Movie> for MovieDto {
    fn from(value: Movie) -> Self {
        let DestructMovie {
            title,
            stock,
            price,
        } = value.into_destruct();
        Self {
            title: title.into(),
            stock: stock.into(),
            price: price.into(),
        }
    }
}

impl TryFrom<MovieDto> for Movie {
    type Error = Report<KernelError>;

    fn try_from(value: MovieDto) -> Result<Self, Self::Error> {
        Ok(Movie::new(
            MovieTitle::new(value.title),
            MovieStock::new(value.stock),
            MoviePrice::new(value.price)?,
        ))
    }
}
