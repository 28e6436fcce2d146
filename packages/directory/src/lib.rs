//! Doctor directory core.
//!
//! Everything the web frontend needs that is not markup: the provider model,
//! the one-shot directory load, the search/category filter and the booking
//! form state machine.
//!
//! # Example
//!
//! ```rust,ignore
//! use directory::{filter, DirectoryStore, HttpSource};
//!
//! let source = HttpSource::new("https://example.org/doctors.json");
//! let mut store = DirectoryStore::new();
//! store.load(&source).await;
//!
//! if let Some(snapshot) = store.snapshot() {
//!     for provider in filter(snapshot, "derm", "") {
//!         println!("{} ({})", provider.name, provider.hospital);
//!     }
//! }
//! ```

pub mod booking;
pub mod config;
pub mod error;
pub mod filter;
pub mod image;
pub mod lookup;
pub mod navigation;
pub mod source;
pub mod store;
pub mod types;

pub use booking::{
    BookingCommand, BookingDraft, BookingEvent, BookingField, BookingMachine, BookingState,
    MISSING_FIELDS_PROMPT,
};
pub use config::DirectoryConfig;
pub use error::{DirectoryError, Result, ValidationError};
pub use filter::{categories, filter, DirectoryStats, FilterCriteria, ResultSummary};
pub use image::{initials, profile_image};
pub use lookup::{parse_provider_id, ProviderLookup};
pub use navigation::{Destination, RouteContext};
pub use source::{parse_document, HttpSource, ProviderSource};
pub use store::{DirectoryStore, LoadState};
pub use types::{Provider, ProviderId, Snapshot};
