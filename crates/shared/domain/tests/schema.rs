use folio_domain::schema::{PersonSchema, SCHEMA_CONTEXT, WebSiteSchema};

#[test]
fn person_schema_uses_json_ld_keys() {
    let schema = PersonSchema {
        name: "Tra Hoang Trong".to_owned(),
        url: "https://trahoangdev.com".to_owned(),
        same_as: vec!["https://github.com/trahoangdev".to_owned()],
        job_title: "Full Stack Developer".to_owned(),
        ..PersonSchema::default()
    };

    let value = serde_json::to_value(&schema).expect("serialize");
    assert_eq!(value["@context"], SCHEMA_CONTEXT);
    assert_eq!(value["@type"], "Person");
    assert_eq!(value["jobTitle"], "Full Stack Developer");
    assert_eq!(value["sameAs"][0], "https://github.com/trahoangdev");
    assert_eq!(value["worksFor"]["@type"], "Organization");
    assert_eq!(value["address"]["@type"], "PostalAddress");
}

#[test]
fn website_schema_uses_json_ld_keys() {
    let schema = WebSiteSchema {
        name: "Tra Hoang Trong Portfolio".to_owned(),
        url: "https://trahoangdev.com".to_owned(),
        ..WebSiteSchema::default()
    };

    let value = serde_json::to_value(&schema).expect("serialize");
    assert_eq!(value["@context"], SCHEMA_CONTEXT);
    assert_eq!(value["@type"], "WebSite");
    assert_eq!(value["inLanguage"], "en");
    assert_eq!(value["author"]["@type"], "Person");
}
