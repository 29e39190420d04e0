//! 사용자 수정 처리기 연결 지점
//!
//! 검증을 통과한 `UserUpdate`를 실제 수정 로직으로 넘기는 trait입니다.
//! 영속화는 이 크레이트의 범위 밖이므로 기본 구현은 입력을 그대로 돌려줍니다.

use async_trait::async_trait;
use log::info;

use crate::domain::dto::users::request::UserUpdate;
use crate::errors::AppResult;

/// 검증된 사용자 수정 입력을 받는 처리기
#[async_trait]
pub trait UserUpdateHandler: Send + Sync {
    /// 수정을 적용하고 반영된 입력을 반환합니다.
    async fn handle(&self, update: UserUpdate) -> AppResult<UserUpdate>;
}

/// 입력을 변경 없이 돌려주는 처리기
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughUpdateHandler;

#[async_trait]
impl UserUpdateHandler for PassThroughUpdateHandler {
    async fn handle(&self, update: UserUpdate) -> AppResult<UserUpdate> {
        info!(
            "사용자 수정 입력 접수: user_id={}, age={:?}, is_subscribed={:?}",
            update.user_id, update.age, update.is_subscribed
        );
        Ok(update)
    }
}
