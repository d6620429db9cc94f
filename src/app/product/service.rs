//! 产品存储服务
//!
//! 内存中的有序产品集合及其五个操作。集合由一把互斥锁保护，
//! 所有修改操作串行执行。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Deserialize;
use tracing::debug;

use super::model::{Product, ProductFields};

/// 存储错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Product not found")]
    NotFound,
}

/// 新产品 id 的分配策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// 当前产品数量 + 1，删除后可能与已有 id 冲突
    #[default]
    Count,
    /// 单调递增计数器，从不复用 id
    Monotonic,
}

struct Inventory {
    products: Vec<Product>,
    next_id: i64,
}

impl Inventory {
    fn position(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|p| p.has_id(id))
    }
}

#[derive(Clone)]
pub struct ProductStore {
    inner: Arc<Mutex<Inventory>>,
    id_policy: IdPolicy,
}

impl ProductStore {
    /// 创建一个只含预置产品的存储
    pub fn new(id_policy: IdPolicy) -> Self {
        Self::with_products(vec![Product::seed()], id_policy)
    }

    pub fn with_products(products: Vec<Product>, id_policy: IdPolicy) -> Self {
        let next_id = products.len() as i64 + 1;
        Self {
            inner: Arc::new(Mutex::new(Inventory { products, next_id })),
            id_policy,
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    // 处理器中不会在持锁期间 panic，中毒后的数据仍然一致
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    /// 按插入顺序返回全部产品
    pub fn list(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// 追加一个新产品并返回它
    pub fn create(&self, fields: ProductFields) -> Product {
        let mut inventory = self.lock();
        let id = match self.id_policy {
            IdPolicy::Count => inventory.products.len() as i64 + 1,
            IdPolicy::Monotonic => inventory.next_id,
        };
        inventory.next_id = inventory.next_id.max(id) + 1;

        let product = Product::new(id, fields);
        inventory.products.push(product.clone());
        debug!("创建产品 id={}, 当前数量 {}", id, inventory.products.len());
        product
    }

    /// 线性查找 id 对应的产品，`None` 表示路径 id 无法解析
    pub fn get(&self, id: Option<i64>) -> Result<Product, StoreError> {
        let inventory = self.lock();
        id.and_then(|id| inventory.position(id))
            .map(|index| inventory.products[index].clone())
            .ok_or(StoreError::NotFound)
    }

    /// 将字段浅层覆盖到已有产品上，并原位替换
    pub fn update(&self, id: Option<i64>, fields: ProductFields) -> Result<(), StoreError> {
        let mut inventory = self.lock();
        let index = id
            .and_then(|id| inventory.position(id))
            .ok_or(StoreError::NotFound)?;

        let mut updated = inventory.products[index].clone();
        updated.merge(fields);
        inventory.products[index] = updated;
        debug!("更新产品 id={:?}", id);
        Ok(())
    }

    /// 移除所有匹配 id 的产品，其余产品的位置和 id 不变，返回移除数量
    pub fn delete(&self, id: Option<i64>) -> Result<usize, StoreError> {
        let mut inventory = self.lock();
        let id = id
            .filter(|&id| inventory.position(id).is_some())
            .ok_or(StoreError::NotFound)?;

        let before = inventory.products.len();
        inventory.products.retain(|p| !p.has_id(id));
        let removed = before - inventory.products.len();
        debug!(
            "删除产品 id={}, 移除 {} 条, 剩余数量 {}",
            id,
            removed,
            inventory.products.len()
        );
        Ok(removed)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}
