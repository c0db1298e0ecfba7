pub use std::fmt::Display;
pub use std::sync::Arc;

pub use log::{error, info};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming, Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;

pub use chrono::{DateTime, FixedOffset, TimeZone, Utc};

pub use anyhow::{anyhow, Context, Result};

pub use getset::Getters;
pub use derive_new::new;

pub use async_trait::async_trait;

pub use once_cell::sync::Lazy as once_lazy;

pub use reqwest::Client;

pub use dotenv::dotenv;

pub use futures::join;
