#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Weight must be a positive number of kilograms")]
    Weight,
    #[error("Height must be a positive number of centimeters")]
    Height,
    #[error("Age must be a positive number of years")]
    Age,
}
