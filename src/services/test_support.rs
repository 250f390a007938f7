//! In-memory repositories that record every gateway call, for service tests

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{
    Collection, CollectionDetails, CollectionRepository, CollectionSummary,
    CreateCollectionInput, CreateQuotationInput, DomainError, Quotation, QuotationDetails,
    QuotationRepository,
};

#[derive(Default)]
struct Inner {
    collections: BTreeMap<i32, Collection>,
    quotations: BTreeMap<i32, Quotation>,
    next_id: i32,
    calls: Vec<String>,
    vanish_on_update: Option<i32>,
}

impl Inner {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn details(&self, quotation: &Quotation) -> QuotationDetails {
        QuotationDetails {
            id: quotation.id,
            title: quotation.title.clone(),
            collection_id: quotation.collection_id,
            created_at: quotation.created_at.clone(),
            collection: self
                .collections
                .get(&quotation.collection_id)
                .cloned()
                .map(CollectionSummary::from),
        }
    }
}

/// Backs both repository traits so quotation joins can see collections
#[derive(Default)]
pub(crate) struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    fn record(&self, call: String) -> MutexGuard<'_, Inner> {
        let mut inner = self.lock();
        inner.calls.push(call);
        inner
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Make the next collection update lose its row, as a concurrent delete would
    pub fn vanish_collection_on_update(&self, id: i32) {
        self.lock().vanish_on_update = Some(id);
    }

    /// Seed a collection without recording a call
    pub fn insert_collection(&self, input: CreateCollectionInput) -> i32 {
        let mut inner = self.lock();
        let id = inner.next_id();
        inner.collections.insert(id, new_collection(id, input));
        id
    }

    pub fn quotation(&self, id: i32) -> Option<Quotation> {
        self.lock().quotations.get(&id).cloned()
    }
}

fn new_collection(id: i32, input: CreateCollectionInput) -> Collection {
    Collection {
        id,
        title: input.title,
        subtitle: input.subtitle,
        image: input.image,
        author: input.author,
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn title_matches(title: &str, filter: &Option<String>) -> bool {
    match filter {
        Some(f) if !f.is_empty() => title.contains(f.as_str()),
        _ => true,
    }
}

#[async_trait]
impl CollectionRepository for InMemoryStore {
    async fn find_all(&self, title: Option<String>) -> Result<Vec<Collection>, DomainError> {
        let inner = self.record(format!("collection.find_all({:?})", title));
        Ok(inner
            .collections
            .values()
            .filter(|c| title_matches(&c.title, &title))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectionDetails>, DomainError> {
        let inner = self.record(format!("collection.find_by_id({})", id));
        Ok(inner.collections.get(&id).map(|c| CollectionDetails {
            collection: c.clone(),
            quotations: inner
                .quotations
                .values()
                .filter(|q| q.collection_id == id)
                .cloned()
                .collect(),
        }))
    }

    async fn find_bare(&self, id: i32) -> Result<Option<Collection>, DomainError> {
        let inner = self.record(format!("collection.find_bare({})", id));
        Ok(inner.collections.get(&id).cloned())
    }

    async fn create(&self, input: CreateCollectionInput) -> Result<Collection, DomainError> {
        let mut inner = self.record("collection.create".to_string());
        let id = inner.next_id();
        let collection = new_collection(id, input);
        inner.collections.insert(id, collection.clone());
        Ok(collection)
    }

    async fn update(
        &self,
        id: i32,
        collection: Collection,
    ) -> Result<Option<Collection>, DomainError> {
        let mut inner = self.record(format!("collection.update({})", id));
        if inner.vanish_on_update == Some(id) {
            inner.collections.remove(&id);
        }
        if let Some(stored) = inner.collections.get_mut(&id) {
            stored.title = collection.title;
            stored.subtitle = collection.subtitle;
            stored.image = collection.image;
            stored.author = collection.author;
        }
        Ok(inner.collections.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut inner = self.record(format!("collection.delete({})", id));
        inner.collections.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl QuotationRepository for InMemoryStore {
    async fn find_all(
        &self,
        title: Option<String>,
    ) -> Result<Vec<QuotationDetails>, DomainError> {
        let inner = self.record(format!("quotation.find_all({:?})", title));
        Ok(inner
            .quotations
            .values()
            .filter(|q| title_matches(&q.title, &title))
            .map(|q| inner.details(q))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<QuotationDetails>, DomainError> {
        let inner = self.record(format!("quotation.find_by_id({})", id));
        Ok(inner
            .quotations
            .get(&id)
            .map(|q| inner.details(q))
            .filter(|d| d.collection.is_some()))
    }

    async fn find_bare(&self, id: i32) -> Result<Option<Quotation>, DomainError> {
        let inner = self.record(format!("quotation.find_bare({})", id));
        Ok(inner.quotations.get(&id).cloned())
    }

    async fn create(&self, input: CreateQuotationInput) -> Result<Quotation, DomainError> {
        let mut inner = self.record("quotation.create".to_string());
        let id = inner.next_id();
        let quotation = Quotation {
            id,
            title: input.title,
            collection_id: input.collection_id,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        inner.quotations.insert(id, quotation.clone());
        Ok(quotation)
    }

    async fn update(
        &self,
        id: i32,
        quotation: Quotation,
    ) -> Result<Option<Quotation>, DomainError> {
        let mut inner = self.record(format!("quotation.update({})", id));
        if let Some(stored) = inner.quotations.get_mut(&id) {
            stored.title = quotation.title;
            stored.collection_id = quotation.collection_id;
        }
        Ok(inner.quotations.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut inner = self.record(format!("quotation.delete({})", id));
        inner.quotations.remove(&id);
        Ok(())
    }
}
