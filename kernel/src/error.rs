use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    CustomerRequired,
    MovieListRequired,
    /*
     * Kept apart from the other rejections so callers can branch on missing inventory
     */
    OutOfStock,
    CustomerBlocked,
    CreditCheckUnavailable,
    InvalidPrice,
    InvalidDueDate,
    NotificationFailed,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::CustomerRequired => write!(f, "Customer required"),
            KernelError::MovieListRequired => write!(f, "Movie required"),
            KernelError::OutOfStock => write!(f, "Movie out of stock"),
            KernelError::CustomerBlocked => write!(f, "Customer blocked"),
            KernelError::CreditCheckUnavailable => {
                write!(f, "Problem with credit check service, try again")
            }
            KernelError::InvalidPrice => write!(f, "Price must not be negative"),
            KernelError::InvalidDueDate => write!(f, "Due date must be after the rental date"),
            KernelError::NotificationFailed => write!(f, "Failed to notify overdue rentals"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
