//! Page controllers for the e-waste pickup service: the login page and the
//! pickup-request page, plus the actix-web routes that host them.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, Timings};
pub use error::{AppError, FormReport};
pub use handlers::login::LoginPage;
pub use handlers::navigator::{Navigator, ScheduledRedirect, TracingNavigator};
pub use handlers::pickup::{PendingSubmission, PickupPage, Receipt, SubmissionState};
pub use state::AppState;
