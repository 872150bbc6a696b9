pub mod event;
pub mod forms;
pub mod locale;
pub mod payment;
pub mod ports;
pub mod provider;
pub mod record;
pub mod state;
pub mod step;
pub mod transaction;
pub mod view;
