//! # 사용자 리포지토리 구현
//!
//! 사용자 서비스 프로세스 메모리에 사용자 레코드를 보관하는 저장소입니다.
//!
//! ## 특징
//!
//! - **인스턴스 소유 상태**: 전역 변수 없이 레코드 맵과 ID 카운터를 한 객체가 소유
//! - **단일 RwLock**: 쓰기(등록)는 배타 락, 읽기(로그인/검증)는 공유 락
//! - **보조 인덱스**: `id → username` 맵으로 토큰 검증 시 선형 탐색을 피함
//! - **유니크 제약**: 사용자명 중복 검사와 삽입이 같은 쓰기 락 안에서 수행됨

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::domain::entities::UserRecord;
use crate::errors::AppError;

#[derive(Debug, Default)]
struct UserTable {
    /// 마지막으로 발급한 ID (첫 사용자는 1)
    last_id: i64,
    by_username: HashMap<String, UserRecord>,
    username_by_id: HashMap<i64, String>,
}

#[derive(Debug, Default)]
pub struct UserRepository {
    table: RwLock<UserTable>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 손상되었습니다".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 손상되었습니다".to_string()))
    }

    /// 새 사용자를 삽입하고 발급된 레코드를 반환합니다.
    ///
    /// 사용자명이 이미 있으면 `ConflictError`를 반환하며, 이 경우 ID 카운터는
    /// 증가하지 않습니다.
    pub fn create(&self, username: String, password_hash: String, email: String) -> Result<UserRecord, AppError> {
        let mut table = self.write()?;

        if table.by_username.contains_key(&username) {
            return Err(AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", username)));
        }

        table.last_id += 1;
        let record = UserRecord::new(table.last_id, username, password_hash, email);

        table.username_by_id.insert(record.id, record.username.clone());
        table.by_username.insert(record.username.clone(), record.clone());

        Ok(record)
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.read()?.by_username.get(username).cloned())
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, AppError> {
        let table = self.read()?;
        let record = table
            .username_by_id
            .get(&id)
            .and_then(|username| table.by_username.get(username))
            .cloned();
        Ok(record)
    }

    pub fn count(&self) -> Result<usize, AppError> {
        Ok(self.read()?.by_username.len())
    }
}
