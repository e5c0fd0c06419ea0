// Per-session listing state and the in-process session registry.
// A session is confined to one user: its record, selections, and generated
// sections are never touched by another session.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use crate::brand::{Brand, BrandCatalog};
use crate::generation::builder::{ContentRequestBuilder, KeywordList, PreconditionError};
use crate::generation::sections::ContentSection;
use crate::generation::store::ContentStore;
use crate::llm_client::{GenerationClient, LlmError, ResponseMode};
use crate::models::category::Category;
use crate::sheet::{CanonicalField, ProductRecord};

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("Error generating {section}: {source}")]
    Llm {
        section: ContentSection,
        #[source]
        source: LlmError,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

/// Keywords arrive either as the comma-separated text box or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeywordInput {
    Text(String),
    List(Vec<String>),
}

impl KeywordInput {
    pub fn into_list(self) -> KeywordList {
        match self {
            KeywordInput::Text(text) => KeywordList::parse(&text),
            KeywordInput::List(items) => KeywordList::from_items(items),
        }
    }
}

/// Interactive selection. Absent fields leave the current value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub keywords: Option<KeywordInput>,
}

#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub file_name: Option<String>,
    pub product: ProductRecord,
    /// Pre-selection hints read from the sheet; never used for generation.
    pub detected_category: Category,
    pub detected_brand: Option<&'static Brand>,
    /// User-confirmed category. Generation is refused until this is set.
    pub category: Option<Category>,
    /// Brand used for generation: the sheet's brand name when the catalog
    /// knows it, until a selection replaces it.
    pub brand: Option<&'static Brand>,
    pub keywords: KeywordList,
    pub content: ContentStore,
}

impl Session {
    pub fn open(product: ProductRecord, catalog: &BrandCatalog, file_name: Option<String>) -> Self {
        let detected_category = Category::detect(product.get(CanonicalField::Category));
        let detected_brand = catalog.detect(product.get(CanonicalField::BrandName));
        let brand = catalog.normalize(product.get(CanonicalField::BrandName));
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            file_name,
            product,
            detected_category,
            detected_brand,
            category: None,
            brand,
            keywords: KeywordList::default(),
            content: ContentStore::new(),
        }
    }

    /// Applies the user's confirmed choices. Category and brand also override the
    /// corresponding record fields; a brand outside the catalog is kept as text
    /// and generation falls back to the generic review policy.
    pub fn apply_selection(&mut self, catalog: &BrandCatalog, selection: Selection) {
        if let Some(category) = selection.category {
            self.category = Some(category);
            self.product.override_category(category.as_str());
        }
        if let Some(raw_brand) = selection.brand {
            self.brand = catalog.normalize(&raw_brand);
            match self.brand {
                Some(brand) => self.product.override_brand_name(brand.name),
                None => self.product.override_brand_name(&raw_brand),
            }
        }
        if let Some(keywords) = selection.keywords {
            self.keywords = keywords.into_list();
        }
    }

    pub fn request_builder(&self) -> ContentRequestBuilder<'_> {
        ContentRequestBuilder::new(&self.product, self.category, self.brand, &self.keywords)
    }

    /// Builds the request, invokes the collaborator, and stores the text.
    ///
    /// A precondition failure makes no call. A collaborator failure leaves every
    /// stored section, including this one, as it was.
    pub async fn generate_section(
        &mut self,
        client: &dyn GenerationClient,
        section: ContentSection,
    ) -> Result<&str, GenerateError> {
        let request = self.request_builder().build(section).map_err(|e| {
            warn!("Session {}: {section} refused: {e}", self.id);
            e
        })?;

        let text = client
            .complete(
                &request.system_instruction,
                &request.user_instruction,
                ResponseMode::Text,
            )
            .await
            .map_err(|source| {
                warn!("Session {}: generating {section} failed: {source}", self.id);
                GenerateError::Llm { section, source }
            })?;

        info!(
            "Session {}: generated {section} ({} chars)",
            self.id,
            text.chars().count()
        );
        self.content.set(section, text);
        Ok(self.content.get(section).unwrap_or_default())
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            file_name: self.file_name.as_deref(),
            product: &self.product,
            display: self
                .product
                .display_rows()
                .into_iter()
                .map(|(label, value)| DisplayRow { label, value })
                .collect(),
            unresolved: CanonicalField::ALL
                .iter()
                .filter(|&&f| self.product.field(f).is_unset())
                .map(|f| f.key())
                .collect(),
            detected_category: self.detected_category,
            detected_brand: self.detected_brand.map(|b| b.name),
            category: self.category,
            brand: self.brand.map(|b| b.name),
            brand_name: self.product.get(CanonicalField::BrandName),
            keywords: &self.keywords,
            sections: &self.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DisplayRow<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

/// Session snapshot returned by the session endpoints.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub file_name: Option<&'a str>,
    pub product: &'a ProductRecord,
    pub display: Vec<DisplayRow<'a>>,
    /// Canonical fields no sheet row matched; they carry their defaults.
    pub unresolved: Vec<&'static str>,
    pub detected_category: Category,
    pub detected_brand: Option<&'static str>,
    pub category: Option<Category>,
    /// Catalog brand, when the selection resolved to one.
    pub brand: Option<&'static str>,
    pub brand_name: &'a str,
    pub keywords: &'a KeywordList,
    pub sections: &'a ContentStore,
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

pub type SharedSession = Arc<Mutex<Session>>;

pub const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

struct Entry {
    session: SharedSession,
    last_used: DateTime<Utc>,
}

/// Sessions keyed by id. Each session has its own lock, so a slow generation
/// call only blocks further actions on that same session.
///
/// A session idle for longer than `ttl` is dropped: lazily when looked up, and
/// in bulk whenever a new session is inserted.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_SESSION_TTL_SECS))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn insert(&self, session: Session) -> SharedSession {
        let id = session.id;
        let shared = Arc::new(Mutex::new(session));
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        let evicted = evict_idle(&mut sessions, now, self.ttl);
        if evicted > 0 {
            info!("Evicted {evicted} idle sessions");
        }
        sessions.insert(
            id,
            Entry {
                session: Arc::clone(&shared),
                last_used: now,
            },
        );
        shared
    }

    /// Looks up a live session and marks it as used.
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        if now - entry.last_used > self.ttl {
            sessions.remove(&id);
            info!("Session {id} expired");
            return None;
        }
        entry.last_used = now;
        Some(Arc::clone(&entry.session))
    }

    /// Drops every session idle for longer than the TTL as of `now`.
    pub async fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        evict_idle(&mut *self.sessions.write().await, now, self.ttl)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn evict_idle(sessions: &mut HashMap<Uuid, Entry>, now: DateTime<Utc>, ttl: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, entry| now - entry.last_used <= ttl);
    before - sessions.len()
}
