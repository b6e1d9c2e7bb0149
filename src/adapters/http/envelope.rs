use serde::{Deserialize, Serialize};

/// Uniform JSON wrapper around every API response
///
/// Serialized as `{ "status": bool, "statusCode": int, "message": string,
/// "data": T | null }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
  pub status: bool,
  pub status_code: i32,
  pub message: String,
  pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
  /// Success envelope carrying a payload and no message
  pub fn success(status_code: i32, data: T) -> Self {
    Self {
      status: true,
      status_code,
      message: String::new(),
      data: Some(data),
    }
  }

  /// Success envelope carrying a payload and a message
  pub fn success_with_message(status_code: i32, message: impl Into<String>, data: T) -> Self {
    Self {
      status: true,
      status_code,
      message: message.into(),
      data: Some(data),
    }
  }

  /// Failure envelope with a message and no payload
  pub fn failure(status_code: i32, message: impl Into<String>) -> Self {
    Self {
      status: false,
      status_code,
      message: message.into(),
      data: None,
    }
  }
}

/// Polymorphic capability for shaping response envelopes
pub trait ResponseFactory {
  type Data: Serialize;

  fn create_response(&self) -> ResponseEnvelope<Self::Data>;
}

/// Factory for success envelopes with a payload
pub struct SuccessResponseFactory<T> {
  status_code: i32,
  data: T,
}

impl<T> SuccessResponseFactory<T> {
  pub fn new(status_code: i32, data: T) -> Self {
    Self { status_code, data }
  }
}

impl<T: Serialize + Clone> ResponseFactory for SuccessResponseFactory<T> {
  type Data = T;

  fn create_response(&self) -> ResponseEnvelope<T> {
    ResponseEnvelope::success(self.status_code, self.data.clone())
  }
}

/// Factory for generic failure envelopes with a message
pub struct FailureResponseFactory {
  status_code: i32,
  message: String,
}

impl FailureResponseFactory {
  pub fn new(status_code: i32, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }
}

impl ResponseFactory for FailureResponseFactory {
  type Data = serde_json::Value;

  fn create_response(&self) -> ResponseEnvelope<serde_json::Value> {
    ResponseEnvelope::failure(self.status_code, self.message.clone())
  }
}

/// Factory for unauthorized failure envelopes (fixed 401 status code)
pub struct UnauthorizedResponseFactory {
  message: String,
}

impl UnauthorizedResponseFactory {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}

impl ResponseFactory for UnauthorizedResponseFactory {
  type Data = serde_json::Value;

  fn create_response(&self) -> ResponseEnvelope<serde_json::Value> {
    ResponseEnvelope::failure(401, self.message.clone())
  }
}
