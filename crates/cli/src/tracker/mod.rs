// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking client for the tracker REST API.
//!
//! One session per run: [`TrackerClient::connect`] performs the login
//! exchange and the session cookie lives in the client's cookie store for
//! the remaining calls. All requests are synchronous and follow the
//! `/rest/{api}/latest/{action}` URL template. A 4xx response is logged
//! with its body and surfaced as [`Error::ClientStatus`]; callers decide
//! whether that is recoverable.

pub mod models;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use models::{Component, CreateIssue, CreatedIssue, FieldInfo, IssueBean, IssueType, Login, User};

/// Name of the tracker field holding the epic link.
const EPIC_LINK_FIELD_NAME: &str = "Epic Link";

/// A logged-in tracker session.
#[derive(Debug)]
pub struct TrackerClient {
    base_url: String,
    http: Client,
}

impl TrackerClient {
    /// Connects to the tracker and performs the login exchange.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailed`] when the tracker rejects
    /// the credentials. Login failure is fatal to the run; there is no
    /// retry.
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(config.insecure)
            .build()?;
        let client = TrackerClient {
            base_url: config.base_url(),
            http,
        };
        client.login(&config.user, &config.password)?;
        Ok(client)
    }

    fn login(&self, user: &str, password: &str) -> Result<()> {
        let body = Login {
            username: user.to_string(),
            password: password.to_string(),
        };
        self.post("auth", "session", &body).map_err(|e| match e {
            Error::ClientStatus { .. } => Error::AuthenticationFailed {
                user: user.to_string(),
            },
            other => other,
        })?;
        Ok(())
    }

    /// Fetches an issue with all fields expanded.
    pub fn issue(&self, key: &str) -> Result<IssueBean> {
        self.get_json(&format!("issue/{}", key), &[("expand", "all")])
    }

    /// Discovers the id of the `Epic Link` custom field, if the tracker
    /// has one.
    pub fn epic_link_field(&self) -> Result<Option<String>> {
        let fields: Vec<FieldInfo> = self.get_json("field", &[])?;
        Ok(fields
            .into_iter()
            .find(|f| f.name == EPIC_LINK_FIELD_NAME)
            .map(|f| f.id))
    }

    /// Lists the tracker's issue types.
    pub fn issue_types(&self) -> Result<Vec<IssueType>> {
        self.get_json("issuetype", &[])
    }

    /// Lists a project's components.
    pub fn components(&self, project: &str) -> Result<Vec<Component>> {
        self.get_json(&format!("project/{}/components", project), &[])
    }

    /// Finds the tracker account whose registered email matches `email`.
    pub fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users: Vec<User> = self.get_json("user/search", &[("username", email)])?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    /// Creates an issue and returns its key and self-link.
    pub fn create_issue(&self, request: &CreateIssue) -> Result<CreatedIssue> {
        Ok(self.post("api", "issue/", request)?.json()?)
    }

    fn url(&self, api: &str, action: &str) -> String {
        format!("{}/rest/{}/latest/{}", self.base_url, api, action)
    }

    fn get(&self, action: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = self.url("api", action);
        debug!(%url, "tracker GET");
        let resp = self.http.get(&url).query(query).send()?;
        check_status(action, resp)
    }

    fn post<B: Serialize>(&self, api: &str, action: &str, body: &B) -> Result<Response> {
        let url = self.url(api, action);
        debug!(%url, "tracker POST");
        let resp = self.http.post(&url).json(body).send()?;
        check_status(action, resp)
    }

    fn get_json<T: DeserializeOwned>(&self, action: &str, query: &[(&str, &str)]) -> Result<T> {
        Ok(self.get(action, query)?.json()?)
    }
}

/// Maps a 4xx response to [`Error::ClientStatus`], logging status and body.
fn check_status(action: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_client_error() {
        let body = resp.text().unwrap_or_default();
        error!(%status, action, body = %body, "tracker rejected request");
        return Err(Error::ClientStatus {
            status: status.as_u16(),
            action: action.to_string(),
            body,
        });
    }
    Ok(resp.error_for_status()?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
