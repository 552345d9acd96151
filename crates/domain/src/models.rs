use serde::{Deserialize, Serialize};
use thiserror::Error;

// 读取侧的评论视图。特意不含 email 字段：
// 查询结果从结构上就不可能泄露邮箱。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub date: String,
    pub page: String,
    pub user: String,
    pub text: String,
}

// 写入侧的评论载荷。缺失的字段按空值反序列化，
// 这样 "字段不存在" 和 "字段为空串" 走同一条校验路径。
#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page.is_empty() || self.user.is_empty() || self.text.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }
}

// Display 即响应体文本，不要改措辞
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertReceipt {
    pub id: i64,
    pub rows_affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewComment {
        NewComment {
            page: "blog/hello".into(),
            user: "alice".into(),
            text: "nice post".into(),
            email: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_comment() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_required_fields() {
        for field in ["page", "user", "text"] {
            let mut c = valid();
            match field {
                "page" => c.page.clear(),
                "user" => c.user.clear(),
                _ => c.text.clear(),
            }
            assert_eq!(c.validate(), Err(ValidationError::MissingRequiredFields));
        }
    }

    #[test]
    fn test_validate_ignores_missing_email() {
        let mut c = valid();
        c.email = None;
        assert!(c.validate().is_ok());
        c.email = Some(String::new());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_missing_json_fields_deserialize_as_empty() {
        let c: NewComment = serde_json::from_str(r#"{"page":"p"}"#).unwrap();
        assert_eq!(c.page, "p");
        assert!(c.user.is_empty());
        assert!(c.text.is_empty());
        assert!(c.email.is_none());
        assert_eq!(c.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn test_validation_error_wire_text() {
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Missing required fields"
        );
    }

    #[test]
    fn test_comment_serializes_without_email_key() {
        let c = Comment {
            id: 1,
            date: "2024-3-6 5:7:9".into(),
            page: "p".into(),
            user: "u".into(),
            text: "t".into(),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["id"], 1);
    }
}
