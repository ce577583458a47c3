//! Per-operation routing between the stable (V1) and enhanced (V2) product
//! implementations. Flags are read once at startup and stay fixed for the
//! life of the process; flipping one migrates exactly one operation.

/// The five operations the facade knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAll,
    GetById,
    Create,
    Update,
    Delete,
}

/// Inbound verb, decoupled from any HTTP crate so the routing decision can
/// be exercised without a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Other,
}

/// Which implementation serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn label(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl Operation {
    /// Total classification: every supported verb/id combination maps to
    /// exactly one operation. `None` means an unrecognized verb; the caller
    /// falls open to the stable implementation.
    pub fn classify(verb: Verb, has_id: bool) -> Option<Self> {
        match (verb, has_id) {
            (Verb::Get, false) => Some(Self::ListAll),
            (Verb::Get, true) => Some(Self::GetById),
            (Verb::Post, _) => Some(Self::Create),
            (Verb::Put, _) => Some(Self::Update),
            (Verb::Delete, _) => Some(Self::Delete),
            (Verb::Other, _) => None,
        }
    }
}

/// Per-operation migration switches. `true` sends the operation to V2.
#[derive(Debug, Clone)]
pub struct FeatureFlags {
    pub list_all: bool,
    pub get_by_id: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Default for FeatureFlags {
    // Current migration state: only the list endpoint has moved.
    fn default() -> Self {
        Self {
            list_all: true,
            get_by_id: false,
            create: false,
            update: false,
            delete: false,
        }
    }
}

impl FeatureFlags {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            list_all: flag("CATALOG_MIGRATE_LIST_ALL", defaults.list_all),
            get_by_id: flag("CATALOG_MIGRATE_GET_BY_ID", defaults.get_by_id),
            create: flag("CATALOG_MIGRATE_CREATE", defaults.create),
            update: flag("CATALOG_MIGRATE_UPDATE", defaults.update),
            delete: flag("CATALOG_MIGRATE_DELETE", defaults.delete),
        }
    }

    fn enabled(&self, operation: Operation) -> bool {
        match operation {
            Operation::ListAll => self.list_all,
            Operation::GetById => self.get_by_id,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }

    /// Flag decision for one classified operation.
    pub fn version_for(&self, operation: Operation) -> ApiVersion {
        if self.enabled(operation) {
            ApiVersion::V2
        } else {
            ApiVersion::V1
        }
    }

    /// Routing decision for a raw request shape. Unrecognized verbs fall
    /// open to V1.
    pub fn route(&self, verb: Verb, has_id: bool) -> ApiVersion {
        match Operation::classify(verb, has_id) {
            Some(operation) => self.version_for(operation),
            None => ApiVersion::V1,
        }
    }
}

fn flag(var: &str, default: bool) -> bool {
    match std::env::var(var) {
        Ok(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        Err(_) => default,
    }
}
