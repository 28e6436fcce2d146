//! Shared test fixtures.

#![allow(dead_code)]

use std::cell::RefCell;

use async_trait::async_trait;
use directory::{Destination, Provider, ProviderId, ProviderSource, RouteContext, Snapshot};

pub fn provider(id: i64, name: &str, speciality: &str, hospital: &str, available: bool) -> Provider {
    Provider {
        id: ProviderId(id),
        name: name.to_string(),
        speciality: speciality.to_string(),
        hospital: hospital.to_string(),
        profile_image: None,
        available: Some(available),
    }
}

pub fn alice_and_bob() -> Snapshot {
    Snapshot::new(vec![
        provider(1, "Alice", "Cardiology", "St. Mary", true),
        provider(2, "Bob", "Dermatology", "City Clinic", false),
    ])
    .unwrap()
}

/// In-memory provider source.
pub struct StaticSource {
    providers: Vec<Provider>,
}

impl StaticSource {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }
}

#[async_trait(?Send)]
impl ProviderSource for StaticSource {
    async fn fetch(&self) -> directory::Result<Snapshot> {
        Snapshot::new(self.providers.clone())
    }
}

/// Route stub that records every navigation request.
#[derive(Debug, Default)]
pub struct RecordingRoute {
    pub path: String,
    pub id: Option<String>,
    pub navigations: RefCell<Vec<Destination>>,
}

impl RecordingRoute {
    pub fn at_booking(id: &str) -> Self {
        Self {
            path: format!("/book/{}", id),
            id: Some(id.to_string()),
            navigations: RefCell::new(Vec::new()),
        }
    }
}

impl RouteContext for RecordingRoute {
    fn param(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            _ => None,
        }
    }

    fn location(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, to: Destination) {
        self.navigations.borrow_mut().push(to);
    }
}
