use serde::{Deserialize, Serialize};
use std::fmt;

/// 选项标识
///
/// 请求中既可能是字符串也可能是数字，保留原始类型：
/// 整数 `1` 与字符串 `"1"` 是两个不同的 id。数值按值比较，`1` 与 `1.0` 相同。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionId {
    /// 整数（含整数值的浮点数）
    Int(i128),
    /// 非整数浮点数，保存 `f64` 的位模式
    Float(u64),
    /// 字符串
    Str(String),
}

impl OptionId {
    /// 由浮点数构造；整数值归并为 [`OptionId::Int`]
    pub fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < 1e36 {
            Self::Int(value as i128)
        } else {
            Self::Float(value.to_bits())
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Self::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<u64> for OptionId {
    fn from(value: u64) -> Self {
        Self::Int(i128::from(value))
    }
}

impl From<i64> for OptionId {
    fn from(value: i64) -> Self {
        Self::Int(i128::from(value))
    }
}

impl From<f64> for OptionId {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl Serialize for OptionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Int(v) => {
                if let Ok(v) = i64::try_from(*v) {
                    serializer.serialize_i64(v)
                } else if let Ok(v) = u64::try_from(*v) {
                    serializer.serialize_u64(v)
                } else {
                    serializer.serialize_f64(*v as f64)
                }
            }
            Self::Float(bits) => serializer.serialize_f64(f64::from_bits(*bits)),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for OptionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct OptionIdVisitor;

        impl<'de> Visitor<'de> for OptionIdVisitor {
            type Value = OptionId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or numeric option id")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(OptionId::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(OptionId::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(OptionId::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value.is_finite() {
                    Ok(OptionId::from_f64(value))
                } else {
                    Err(E::custom("option id must be a finite number"))
                }
            }
        }

        deserializer.deserialize_any(OptionIdVisitor)
    }
}

/// 原始选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: OptionId,
    pub text: String,
    /// 内嵌图片（data URL）
    #[serde(default, deserialize_with = "deserialize_image_ref")]
    pub image: Option<String>,
}

/// 原始题目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    #[serde(default, deserialize_with = "deserialize_image_ref")]
    pub question_image: Option<String>,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// 正确答案序号（从1开始）；无法识别的值记为0，由出题引擎回退到第一个选项
    #[serde(default, deserialize_with = "deserialize_answer_ordinal")]
    pub correct_answer: i64,
}

impl Question {
    /// 正确选项在原始选项列表中的下标（从0开始）
    ///
    /// 序号越界时回退到0
    pub fn correct_index(&self) -> usize {
        self.correct_answer
            .checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .filter(|idx| *idx < self.options.len())
            .unwrap_or(0)
    }

    /// 序号是否需要回退
    pub fn correct_answer_in_range(&self) -> bool {
        self.correct_answer >= 1 && (self.correct_answer as u64) <= self.options.len() as u64
    }

    /// 正确选项；选项为空时返回 None
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.options.get(self.correct_index())
    }
}

// 空字符串视为没有图片
fn deserialize_image_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// 正确答案既可能是数字也可能是字符串
fn deserialize_answer_ordinal<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};

    struct OrdinalVisitor;

    impl<'de> Visitor<'de> for OrdinalVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or numeric string answer ordinal")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(i64::try_from(value).unwrap_or(0))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value.is_finite() && value.fract() == 0.0 {
                Ok(value as i64)
            } else {
                Ok(0)
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.trim().parse().unwrap_or(0))
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    deserializer.deserialize_any(OrdinalVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question_with_answer(answer: serde_json::Value) -> Question {
        serde_json::from_value(json!({
            "questionText": "Capital of France?",
            "questionImage": null,
            "options": [
                { "id": 1, "text": "Paris", "image": null },
                { "id": "two", "text": "London", "image": "" }
            ],
            "correctAnswer": answer
        }))
        .unwrap()
    }

    #[test]
    fn test_option_id_accepts_strings_and_numbers() {
        let q = question_with_answer(json!(1));
        assert_eq!(q.options[0].id, OptionId::from(1u64));
        assert_eq!(q.options[1].id, OptionId::from("two"));
    }

    fn option_id(value: serde_json::Value) -> OptionId {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_option_id_keeps_json_kind() {
        assert_ne!(option_id(json!(1)), option_id(json!("1")));
        assert_eq!(option_id(json!(1)), option_id(json!(1.0)));
        assert_eq!(option_id(json!(-4)), OptionId::Int(-4));
        assert_eq!(option_id(json!(u64::MAX)), OptionId::Int(i128::from(u64::MAX)));
    }

    #[test]
    fn test_float_option_id_accepted() {
        let id = option_id(json!(1700000000000.123));
        assert!(matches!(id, OptionId::Float(_)));
        assert_ne!(id, option_id(json!(1700000000000.456)));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(1700000000000.123));
    }

    #[test]
    fn test_option_id_rejects_other_kinds() {
        for bad in [json!(true), json!(null), json!([1]), json!({ "id": 1 })] {
            assert!(serde_json::from_value::<OptionId>(bad).is_err());
        }
    }

    #[test]
    fn test_empty_image_is_none() {
        let q = question_with_answer(json!(1));
        assert!(q.question_image.is_none());
        assert!(q.options[1].image.is_none());
    }

    #[test]
    fn test_correct_answer_forms() {
        assert_eq!(question_with_answer(json!(2)).correct_answer, 2);
        assert_eq!(question_with_answer(json!("2")).correct_answer, 2);
        assert_eq!(question_with_answer(json!(" 2 ")).correct_answer, 2);
        assert_eq!(question_with_answer(json!(2.0)).correct_answer, 2);
        assert_eq!(question_with_answer(json!(2.5)).correct_answer, 0);
        assert_eq!(question_with_answer(json!("b")).correct_answer, 0);
        assert_eq!(question_with_answer(json!(null)).correct_answer, 0);
        assert_eq!(question_with_answer(json!([1])).correct_answer, 0);
    }

    #[test]
    fn test_missing_correct_answer_defaults_to_zero() {
        let q: Question = serde_json::from_value(json!({
            "questionText": "Q",
            "options": [{ "id": 1, "text": "A" }]
        }))
        .unwrap();
        assert_eq!(q.correct_answer, 0);
        assert_eq!(q.correct_index(), 0);
    }

    #[test]
    fn test_correct_index_fallback() {
        assert_eq!(question_with_answer(json!(2)).correct_index(), 1);
        assert_eq!(question_with_answer(json!(99)).correct_index(), 0);
        assert_eq!(question_with_answer(json!(0)).correct_index(), 0);
        assert_eq!(question_with_answer(json!(-3)).correct_index(), 0);
        assert!(!question_with_answer(json!(99)).correct_answer_in_range());
        assert!(question_with_answer(json!(2)).correct_answer_in_range());
    }

    #[test]
    fn test_missing_option_id_is_rejected() {
        let result: Result<Question, _> = serde_json::from_value(json!({
            "questionText": "Q",
            "options": [{ "text": "A" }],
            "correctAnswer": 1
        }));
        assert!(result.is_err());
    }
}
