//! Common test utilities for page controller tests

#![allow(dead_code)]

use std::sync::{Arc, RwLock};
use std::time::Duration;

use actix_web::web;
use chrono::{TimeZone, Utc};
use ewastenet_backend::models::field::PickupField;
use ewastenet_backend::{AppState, Config, FixedClock, Navigator, PickupPage, Timings};

/// Navigator that remembers every location it was sent to
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    pub visited: Arc<RwLock<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.read().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.visited.write().unwrap().push(location.to_string());
    }
}

/// Friday 2026-10-16, midday UTC
pub fn fixed_clock() -> FixedClock {
    FixedClock::at(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap())
}

/// Short delays for tests that run on the real clock
pub fn quick_timings() -> Timings {
    Timings {
        submit_delay: Duration::from_millis(20),
        pickup_redirect_delay: Duration::from_millis(20),
        login_redirect_delay: Duration::from_millis(20),
        notification_ttl: Duration::from_secs(5),
    }
}

pub fn pickup_page(navigator: &RecordingNavigator) -> PickupPage {
    PickupPage::new(
        Timings::default(),
        Arc::new(fixed_clock()),
        Arc::new(navigator.clone()),
    )
}

pub fn test_state(navigator: &RecordingNavigator) -> web::Data<AppState> {
    let config = Config {
        timings: quick_timings(),
        ..Config::default()
    };
    web::Data::new(AppState::new(
        config,
        Arc::new(fixed_clock()),
        Arc::new(navigator.clone()),
    ))
}

/// Fills every required field with values that pass validation
pub fn fill_valid_form(page: &PickupPage) {
    page.input(PickupField::FullName, "Jordan Rivera").unwrap();
    page.input(PickupField::Email, "jordan@example.com").unwrap();
    page.input(PickupField::Phone, "5551234567").unwrap();
    page.input(PickupField::Address, "12 Elm Street").unwrap();
    page.input(PickupField::City, "Springfield").unwrap();
    page.input(PickupField::ZipCode, "123456789").unwrap();
    // Monday
    page.select_date("2026-10-19").unwrap();
    page.input(PickupField::PickupTime, "09:00-11:00").unwrap();
    page.select_items(["laptop", "monitor"]);
}
