//! 用户集合存储
//!
//! 进程内唯一的用户集合，所有请求共享同一个 [`UserStore`]。
//! 每个操作只获取一次锁，因此单个操作是原子的。

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::model::User;

/// 用户标识
pub type UserId = u64;

/// 用户标识的寻址方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Addressing {
    /// 创建时分配单调递增的标识，删除不影响其他记录
    #[default]
    Stable,
    /// 标识即请求时刻的下标，删除后其后的记录整体前移
    Positional,
}

#[derive(Debug)]
struct Entry {
    id: UserId,
    user: User,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: UserId,
    entries: Vec<Entry>,
}

impl Inner {
    fn position(&self, addressing: Addressing, id: UserId) -> Option<usize> {
        match addressing {
            Addressing::Stable => self.entries.iter().position(|entry| entry.id == id),
            Addressing::Positional => usize::try_from(id)
                .ok()
                .filter(|index| *index < self.entries.len()),
        }
    }
}

/// 有序的用户集合
#[derive(Debug, Default)]
pub struct UserStore {
    addressing: Addressing,
    inner: RwLock<Inner>,
}

impl UserStore {
    pub fn new(addressing: Addressing) -> Self {
        Self {
            addressing,
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// 按插入顺序返回全部用户
    pub fn list(&self) -> Vec<User> {
        self.inner
            .read()
            .entries
            .iter()
            .map(|entry| entry.user.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 追加到集合末尾，返回分配的标识
    pub fn create(&self, user: User) -> (UserId, User) {
        let mut inner = self.inner.write();
        let key = inner.next_id;
        inner.next_id += 1;

        let id = match self.addressing {
            Addressing::Stable => key,
            Addressing::Positional => inner.entries.len() as UserId,
        };
        inner.entries.push(Entry {
            id: key,
            user: user.clone(),
        });
        (id, user)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.inner.read().position(self.addressing, id).is_some()
    }

    /// 原地覆盖指定用户，标识不存在时返回 `None`
    pub fn update(&self, id: UserId, user: User) -> Option<User> {
        let mut inner = self.inner.write();
        let index = inner.position(self.addressing, id)?;
        let entry = &mut inner.entries[index];
        entry.user = user;
        Some(entry.user.clone())
    }

    /// 移除指定用户并返回被移除的记录
    pub fn delete(&self, id: UserId) -> Option<User> {
        let mut inner = self.inner.write();
        let index = inner.position(self.addressing, id)?;
        Some(inner.entries.remove(index).user)
    }
}
