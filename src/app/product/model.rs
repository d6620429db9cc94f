//! 产品数据模型
//!
//! 产品是一个开放的 JSON 对象：除了由存储分配的 `id` 之外，
//! 调用方提交的任意字段都会原样保留。

use serde::Serialize;
use serde_json::{Map, Value};

/// 调用方提交的部分产品字段
pub type ProductFields = Map<String, Value>;

/// 产品记录
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Product(Map<String, Value>);

impl Product {
    /// 用调用方字段创建产品，分配的 id 覆盖调用方提供的 id
    pub fn new(id: i64, mut fields: ProductFields) -> Self {
        fields.insert("id".to_string(), Value::from(id));
        Self(fields)
    }

    /// 进程启动时预置的产品
    pub fn seed() -> Self {
        let mut fields = ProductFields::new();
        fields.insert("id".to_string(), Value::from(1));
        fields.insert("name".to_string(), Value::from("Laptop"));
        fields.insert("price".to_string(), Value::from(100));
        Self(fields)
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// 严格的数值相等：只有数值型 id 才可能匹配
    pub fn has_id(&self, id: i64) -> bool {
        match self.id() {
            Some(Value::Number(n)) => n.as_f64() == Some(id as f64),
            _ => false,
        }
    }

    /// 浅层字段覆盖
    pub fn merge(&mut self, fields: ProductFields) {
        for (key, value) in fields {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// 解析路径中的产品 id
///
/// 与常见的宽松整数解析一致：允许前导空白和正负号，取最长的十进制数字前缀。
/// `"12abc"` 解析为 `12`，`"abc"` 或空串没有结果。
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("  7"), Some(7));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+5"), Some(5));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        // 超出 i64 范围的数字串永远匹配不到
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_new_overrides_caller_id() {
        let mut fields = ProductFields::new();
        fields.insert("id".to_string(), json!(99));
        fields.insert("name".to_string(), json!("Mouse"));

        let product = Product::new(2, fields);
        assert!(product.has_id(2));
        assert!(!product.has_id(99));
        assert_eq!(product.get("name"), Some(&json!("Mouse")));
    }

    #[test]
    fn test_has_id_is_strict() {
        let mut product = Product::seed();
        assert!(product.has_id(1));

        let mut fields = ProductFields::new();
        fields.insert("id".to_string(), json!("1"));
        product.merge(fields);
        assert!(!product.has_id(1));
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut product = Product::seed();
        let mut fields = ProductFields::new();
        fields.insert("price".to_string(), json!(150));
        fields.insert("stock".to_string(), json!(3));
        product.merge(fields);

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "id": 1, "name": "Laptop", "price": 150, "stock": 3 })
        );
    }
}
