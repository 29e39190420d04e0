//! # 필드 역직렬화 유틸리티
//!
//! "키 없음"과 "`null`"을 구분해야 하는 부분 업데이트 필드를 위한 헬퍼입니다.

use serde::{Deserialize, Deserializer};

/// 키가 있으면 `Some`으로 감싸는 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_present")]`와 함께 사용하면
/// `Option<Option<T>>` 필드가 세 가지 상태를 갖습니다.
///
/// * 키 없음 → `None` (`default`가 채움)
/// * `null` → `Some(None)`
/// * 값 → `Some(Some(value))`
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::field_utils::deserialize_present;
///
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default, deserialize_with = "deserialize_present")]
///     age: Option<Option<i64>>,
/// }
///
/// // {}             → None
/// // {"age": null}  → Some(None)
/// // {"age": 0}     → Some(Some(0))
/// ```
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
