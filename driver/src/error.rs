use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Invalid configuration")]
    Config,
    #[error("File system error")]
    Io,
    #[error("Snapshot (de)serialization error")]
    Serde,
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, Report<DriverError>> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|report| report.change_context(KernelError::Internal))
    }
}
