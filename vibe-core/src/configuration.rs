use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

pub const DESCRIPTION_PLACEHOLDER: &str = "No description available";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub github_repositories: Vec<Repository>,
}

// An explicit `null` section means the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Configuration {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Title override, if the document names the organization.
    pub fn title(&self) -> Option<&str> {
        self.organization_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Project {
    pub fn description(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => DESCRIPTION_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;

    #[test]
    fn parse_full_document() {
        let body = br#"{
            "organizationName": "Acme",
            "projects": [
                { "name": "Docs", "url": "https://docs.acme.dev", "description": "Handbook" },
                { "name": "Status", "url": "https://status.acme.dev" }
            ],
            "githubRepositories": [
                { "name": "acme-cli", "url": "https://github.com/acme/acme-cli" }
            ]
        }"#;

        let config = Configuration::from_slice(body).unwrap();

        assert_eq!(config.title(), Some("Acme"));
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[0].description(), "Handbook");
        assert_eq!(config.projects[1].description(), DESCRIPTION_PLACEHOLDER);
        assert_eq!(config.github_repositories[0].name, "acme-cli");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let config = Configuration::from_slice(b"{}").unwrap();

        assert_eq!(config, Configuration::default());
        assert_eq!(config.title(), None);
    }

    #[test]
    fn null_sections_default_to_empty() {
        let config = Configuration::from_slice(
            br#"{ "organizationName": null, "projects": null, "githubRepositories": null }"#,
        )
        .unwrap();

        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn empty_organization_name_keeps_default_title() {
        let config = Configuration::from_slice(br#"{ "organizationName": "" }"#).unwrap();
        assert_eq!(config.title(), None);
    }

    #[test]
    fn empty_description_uses_placeholder() {
        let project = Project {
            name: "x".to_string(),
            url: "https://x.dev".to_string(),
            description: Some(String::new()),
        };
        assert_eq!(project.description(), DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = Configuration::from_slice(b"{ \"projects\": [").unwrap_err();

        match &err {
            DirectoryError::ConfigParse(_) => {}
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().starts_with("Configuration error: "));
    }

    #[test]
    fn project_without_url_is_rejected() {
        let err = Configuration::from_slice(br#"{ "projects": [{ "name": "x" }] }"#).unwrap_err();
        assert!(matches!(err, DirectoryError::ConfigParse(_)));
    }
}
