//! Metadata sent alongside a DFA to the application-generation service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dfa::Dfa;

/// Message broker of the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessagingType {
    #[default]
    Rabbitmq,
    Artemis,
    Kafka,
}

impl MessagingType {
    pub const ALL: [Self; 3] = [Self::Rabbitmq, Self::Artemis, Self::Kafka];

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Rabbitmq => "RabbitMq",
            Self::Artemis => "Artemis",
            Self::Kafka => "Kafka",
        }
    }
}

impl fmt::Display for MessagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Database of the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageType {
    #[default]
    Redis,
    Mongodb,
    Postgresql,
}

impl StorageType {
    pub const ALL: [Self; 3] = [Self::Redis, Self::Mongodb, Self::Postgresql];

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Redis => "Redis",
            Self::Mongodb => "MongoDb",
            Self::Postgresql => "PostgreSql",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Names and options for the generated application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationMetaData {
    pub app_name: String,
    pub app_package: String,
    pub container_registry: String,
    pub messaging_type: MessagingType,
    pub storage_type: StorageType,
    pub include_optional_services: bool,
}

impl ApplicationMetaData {
    pub fn new(app_name: impl Into<String>, app_package: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_package: app_package.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_container_registry(mut self, registry: impl Into<String>) -> Self {
        self.container_registry = registry.into();
        self
    }

    #[must_use]
    pub fn with_messaging_type(mut self, messaging_type: MessagingType) -> Self {
        self.messaging_type = messaging_type;
        self
    }

    #[must_use]
    pub fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = storage_type;
        self
    }

    #[must_use]
    pub fn with_optional_services(mut self, include: bool) -> Self {
        self.include_optional_services = include;
        self
    }

    /// Copy with surrounding whitespace removed from the text fields.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            app_name: self.app_name.trim().to_string(),
            app_package: self.app_package.trim().to_string(),
            container_registry: self.container_registry.trim().to_string(),
            ..self.clone()
        }
    }

    /// File name under which a generated archive is saved.
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.app_name.trim().to_lowercase())
    }
}

/// Request body for the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub dfa: Dfa,
    pub application_meta_data: ApplicationMetaData,
}
