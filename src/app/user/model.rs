//! 用户数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 用户记录
///
/// 写入集合之前必须满足 `name` 非空且 `age > 0`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub age: i64,
}

/// 创建/更新请求体
///
/// 缺失或为 `null` 的字段按空值处理，交给校验阶段拒绝。
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl UserPayload {
    /// 解析请求体中的第一个 JSON 值，忽略其后的多余字节
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        use serde::de::Error as _;

        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(value) => value.map(Option::unwrap_or_default),
            None => Err(serde_json::Error::custom("请求体为空")),
        }
    }

    /// 校验并转换为用户记录
    pub fn into_user(self) -> Result<User, validator::ValidationErrors> {
        let user = User {
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        };
        user.validate()?;
        Ok(user)
    }
}
