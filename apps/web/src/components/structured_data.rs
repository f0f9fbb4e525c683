use dioxus::prelude::*;

use crate::{content, dom};

const PERSON_SCRIPT_ID: &str = "person-schema";
const WEBSITE_SCRIPT_ID: &str = "website-schema";

/// Maintains the JSON-LD `<script>` tags in the document head while the home
/// page is mounted. Renders nothing itself.
#[component]
pub(crate) fn StructuredData() -> Element {
    use_effect(|| {
        inject(PERSON_SCRIPT_ID, &content::person_schema());
        inject(WEBSITE_SCRIPT_ID, &content::website_schema());
    });
    use_drop(|| {
        dom::remove_json_ld(PERSON_SCRIPT_ID);
        dom::remove_json_ld(WEBSITE_SCRIPT_ID);
    });

    rsx! {}
}

fn inject<T: serde::Serialize>(id: &str, descriptor: &T) {
    match serde_json::to_string(descriptor) {
        Ok(json) => dom::inject_json_ld(id, &json),
        Err(err) => tracing::warn!("Structured data for '{id}' not serializable: {err}"),
    }
}
