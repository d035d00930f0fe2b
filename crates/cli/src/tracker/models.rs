// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for the tracker REST API.
//!
//! Deserialization is tolerant: only the fields the hook consumes are
//! modeled, everything else is ignored. Custom fields (`customfield_*`)
//! land in [`IssueFields::custom`] because the epic-link field id differs
//! per tracker instance and is discovered at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Login request body for the session endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

/// An issue as returned by `issue/{key}`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueBean {
    pub key: String,
    pub fields: IssueFields,
}

/// The `fields` object of an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    #[serde(default)]
    pub parent: Option<ParentLink>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(flatten)]
    pub custom: HashMap<String, serde_json::Value>,
}

impl IssueFields {
    /// Returns the non-empty string value of a custom field, if any.
    pub fn custom_string(&self, field_id: &str) -> Option<&str> {
        self.custom
            .get(field_id)
            .and_then(|value| value.as_str())
            .filter(|s| !s.is_empty())
    }

    /// The issue's component names.
    pub fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }
}

/// Parent issue stub embedded in `fields.parent`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParentLink {
    pub key: String,
}

/// A project component.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
}

/// A tracker issue type.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueType {
    pub id: String,
    pub name: String,
}

/// Field metadata entry from the `field` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldInfo {
    pub id: String,
    pub name: String,
}

/// A tracker user from `user/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(rename = "emailAddress")]
    pub email: String,
}

/// Response of a successful issue creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Request payload for issue creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssue {
    pub fields: CreateFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateFields {
    pub project: KeyRef,
    pub issuetype: IdRef,
    pub assignee: NameRef,
    pub reporter: NameRef,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<IdRef>,
}

/// `{"key": ...}` reference object.
#[derive(Debug, Clone, Serialize)]
pub struct KeyRef {
    pub key: String,
}

/// `{"id": ...}` reference object.
#[derive(Debug, Clone, Serialize)]
pub struct IdRef {
    pub id: String,
}

/// `{"name": ...}` reference object.
#[derive(Debug, Clone, Serialize)]
pub struct NameRef {
    pub name: String,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
