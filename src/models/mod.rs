pub mod credentials;
pub mod fee;
pub mod field;
pub mod notification;
pub mod pickup;
pub mod timeslot;
pub mod tracking;
