use serde::{Deserialize, Serialize};

/// Standard `{message, data}` envelope carried by every catalog response.
///
/// `message` is always present ("success" for plain reads and creates,
/// operation-specific wording for updates and deletes, an explanation on
/// failure). `data` is omitted from failure bodies entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_omits_data() {
        let body =
            serde_json::to_value(ApiResponse::<()>::failure("cannot find author with id 9"))
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "cannot find author with id 9"})
        );
    }

    #[test]
    fn success_envelope_carries_data_and_message() {
        let body = serde_json::to_value(ApiResponse::success(vec![1, 2, 3])).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "success", "data": [1, 2, 3]})
        );
    }
}
