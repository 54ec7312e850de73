use serde::Serialize;

/// Success envelope wrapping every data-bearing API response.
///
/// Serializes as `{"status": "success", "data": ...}`.
#[derive(Serialize)]
pub struct SuccessDto<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> SuccessDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Success envelope for operations that return no data, only a message.
#[derive(Serialize)]
pub struct MessageDto {
    pub status: &'static str,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}

/// Error envelope returned for failed requests.
#[derive(Serialize)]
pub struct ErrorDto {
    pub status: &'static str,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: String) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}

/// A single failed field in a validated request body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorDto {
    pub field: &'static str,
    pub message: String,
}

/// Envelope for request bodies that failed field validation.
#[derive(Serialize)]
pub struct ValidationErrorDto {
    pub status: &'static str,
    pub errors: Vec<FieldErrorDto>,
}

impl ValidationErrorDto {
    pub fn new(errors: Vec<FieldErrorDto>) -> Self {
        Self {
            status: "Validation failed",
            errors,
        }
    }
}
