use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::core::holds::{HoldsError, HoldsResult};
use crate::requests::domain::model::{HoldRequestEntity, HoldRequestFilter, HoldRequestPatch,
                                     NewHoldRequest};
use crate::requests::repository::HoldRequestRepository;
use crate::utils::date::format_date;

#[derive(Default)]
struct MemState {
    rows: RwLock<BTreeMap<i64, HoldRequestEntity>>,
    next_id: AtomicI64,
}

lazy_static! {
    // process-wide store so separately wired services see the same rows
    static ref SHARED_STATE: Arc<MemState> = Arc::new(MemState::default());
}

#[derive(Clone)]
pub struct MemHoldRequestRepository {
    state: Arc<MemState>,
}

impl MemHoldRequestRepository {
    pub fn shared() -> Self {
        Self { state: SHARED_STATE.clone() }
    }

    pub fn isolated() -> Self {
        Self { state: Arc::new(MemState::default()) }
    }
}

#[async_trait]
impl HoldRequestRepository for MemHoldRequestRepository {
    async fn create(&self, request: &NewHoldRequest, job_id: &str) -> HoldsResult<HoldRequestEntity> {
        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let entity = HoldRequestEntity::from_new(request, id, job_id);
        self.state.rows.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: i64) -> HoldsResult<HoldRequestEntity> {
        self.state.rows.read().await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn query(&self, filter: &HoldRequestFilter) -> HoldsResult<Vec<HoldRequestEntity>> {
        Ok(self.state.rows.read().await
            .values()
            .filter(|entity| matches(entity, filter))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, patch: &HoldRequestPatch) -> HoldsResult<HoldRequestEntity> {
        let mut rows = self.state.rows.write().await;
        match rows.get_mut(&id) {
            Some(entity) => {
                entity.apply(patch);
                Ok(entity.clone())
            }
            None => Err(not_found(id)),
        }
    }
}

fn matches(entity: &HoldRequestEntity, filter: &HoldRequestFilter) -> bool {
    if let Some(patron) = &filter.patron {
        if &entity.patron != patron {
            return false;
        }
    }
    if let Some(record) = &filter.record {
        if &entity.record != record {
            return false;
        }
    }
    if let Some(processed) = filter.processed {
        if entity.processed != processed {
            return false;
        }
    }
    if let Some(day) = &filter.created_date {
        if !format_date(entity.created_date).starts_with(day.as_str()) {
            return false;
        }
    }
    true
}

fn not_found(id: i64) -> HoldsError {
    HoldsError::not_found(format!("hold request not found for id {}", id).as_str())
}
