use std::collections::BTreeMap;

use liquid_core::model::{Object, Value};
use silisland_config::SiteMetadata;

use crate::error::Result;

/// Site metadata flattened into template globals, one key per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteGlobals {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub include: Vec<String>,
    pub github_repo_link: String,
    pub discord_link: String,
    pub plain_target_domain: String,
    pub target_domain: String,
}

impl SiteGlobals {
    pub fn from_config(site: &SiteMetadata) -> Self {
        Self {
            name: site.site_name.as_str().to_owned(),
            short_name: site.site_short_name.as_str().to_owned(),
            description: site.site_description.as_str().to_owned(),
            include: site
                .include
                .iter()
                .map(|dir| dir.as_str().to_owned())
                .collect(),
            github_repo_link: site.github_repo_link.as_str().to_owned(),
            discord_link: site.discord_link.as_str().to_owned(),
            plain_target_domain: site.plain_target_domain.plain().to_owned(),
            target_domain: site.target_domain().to_owned(),
        }
    }

    pub fn build(self) -> Object {
        let SiteGlobals {
            name,
            short_name,
            description,
            include,
            github_repo_link,
            discord_link,
            plain_target_domain,
            target_domain,
        } = self;

        let mut attributes = Object::new();
        attributes.insert("name".into(), Value::scalar(name));
        attributes.insert("short_name".into(), Value::scalar(short_name));
        attributes.insert("description".into(), Value::scalar(description));
        attributes.insert(
            "include".into(),
            Value::Array(include.into_iter().map(Value::scalar).collect()),
        );
        attributes.insert("github_repo_link".into(), Value::scalar(github_repo_link));
        attributes.insert("discord_link".into(), Value::scalar(discord_link));
        attributes.insert(
            "plain_target_domain".into(),
            Value::scalar(plain_target_domain),
        );
        attributes.insert("target_domain".into(), Value::scalar(target_domain));

        attributes
    }
}

/// Pretty JSON with keys in sorted order.
pub fn to_sorted_json(object: &Object) -> Result<String> {
    let sorted: BTreeMap<&str, &Value> = object.iter().map(|(k, v)| (k.as_str(), v)).collect();
    let json = serde_json::to_string_pretty(&sorted)?;
    Ok(json)
}
