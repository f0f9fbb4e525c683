//! Structured metadata (JSON-LD) descriptors injected into the document head
//! for search-engine consumption.

use serde::Serialize;

/// The schema.org vocabulary URL every descriptor points at.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A schema.org `Person` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    pub image: String,
    pub same_as: Vec<String>,
    pub job_title: String,
    pub works_for: Organization,
    pub address: PostalAddress,
    pub email: String,
    pub knows_about: Vec<String>,
}

/// A schema.org `Organization` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
}

/// A schema.org `PostalAddress` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub address_locality: String,
    pub address_country: String,
}

/// A schema.org `WebSite` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: PersonRef,
    pub in_language: String,
}

/// A schema.org `Person` reference used inside other descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
}

impl Default for PersonSchema {
    fn default() -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_owned(),
            schema_type: "Person".to_owned(),
            name: String::new(),
            url: String::new(),
            image: String::new(),
            same_as: Vec::new(),
            job_title: String::new(),
            works_for: Organization::default(),
            address: PostalAddress::default(),
            email: String::new(),
            knows_about: Vec::new(),
        }
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self { schema_type: "Organization".to_owned(), name: String::new() }
    }
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            schema_type: "PostalAddress".to_owned(),
            address_locality: String::new(),
            address_country: String::new(),
        }
    }
}

impl Default for WebSiteSchema {
    fn default() -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_owned(),
            schema_type: "WebSite".to_owned(),
            name: String::new(),
            url: String::new(),
            description: String::new(),
            author: PersonRef::default(),
            in_language: "en".to_owned(),
        }
    }
}

impl Default for PersonRef {
    fn default() -> Self {
        Self { schema_type: "Person".to_owned(), name: String::new() }
    }
}
