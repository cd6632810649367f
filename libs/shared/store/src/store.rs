use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::professional::{ClinicService, Professional};

use crate::seed;

/// In-memory stand-in for the clinic database.
///
/// Reads clone a snapshot under the read lock, so callers never observe
/// a torn professional record. `mutate_professional` runs its closure
/// under the write lock, which is the serialization point for
/// check-then-act updates such as slot reservation.
#[derive(Clone)]
pub struct ProfessionalStore {
    professionals: Arc<RwLock<HashMap<Uuid, Professional>>>,
    services: Arc<Vec<ClinicService>>,
}

impl ProfessionalStore {
    pub fn new(professionals: Vec<Professional>, services: Vec<ClinicService>) -> Self {
        let professionals = professionals
            .into_iter()
            .map(|professional| (professional.id, professional))
            .collect();

        Self {
            professionals: Arc::new(RwLock::new(professionals)),
            services: Arc::new(services),
        }
    }

    /// Store pre-loaded with the demo clinic roster.
    pub fn with_seed_data() -> Self {
        let (professionals, services) = seed::demo_clinic();
        Self::new(professionals, services)
    }

    pub async fn list_professionals(&self) -> Vec<Professional> {
        let guard = self.professionals.read().await;
        let mut professionals: Vec<Professional> = guard.values().cloned().collect();
        professionals.sort_by(|a, b| a.name.cmp(&b.name));
        professionals
    }

    pub async fn get_professional(&self, id: Uuid) -> Option<Professional> {
        self.professionals.read().await.get(&id).cloned()
    }

    /// Case-insensitive substring match on the display name, the lookup
    /// the conversational tools use before resolving to an id.
    pub async fn find_professional_by_name(&self, name: &str) -> Option<Professional> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.professionals
            .read()
            .await
            .values()
            .find(|professional| professional.name.to_lowercase().contains(&needle))
            .cloned()
    }

    pub async fn upsert_professional(&self, professional: Professional) {
        debug!("Upserting professional {}", professional.id);
        self.professionals
            .write()
            .await
            .insert(professional.id, professional);
    }

    /// Run `f` against the stored record under the write lock. Returns
    /// `None` when the professional does not exist; the closure result
    /// otherwise.
    pub async fn mutate_professional<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Professional) -> R,
    {
        let mut guard = self.professionals.write().await;
        guard.get_mut(&id).map(f)
    }

    pub async fn list_services(&self) -> Vec<ClinicService> {
        self.services.as_ref().clone()
    }

    pub async fn get_service(&self, id: Uuid) -> Option<ClinicService> {
        self.services.iter().find(|service| service.id == id).cloned()
    }
}
