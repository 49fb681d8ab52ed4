pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::AppConfig;

pub use adapters::{FileStore, MemoryStore, ProbeConnectivity, StaticConnectivity};
pub use core::{
    boost::BoostApi,
    business::BusinessApi,
    client::FlexiAdsClient,
    gateway::{ApiOutcome, Gateway},
    member::MemberApi,
    product::ProductApi,
    session::{SessionContext, SessionHandle, SessionStore},
};
pub use utils::display::DisplayMessage;
pub use utils::error::{GatewayError, Result};
