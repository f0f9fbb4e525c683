use dioxus::prelude::*;

use crate::components::sections::{About, Contact, Hero, Projects, Skills};
use crate::components::StructuredData;
use crate::content;

/// The single page: every section stacked in document order.
#[component]
pub(crate) fn Home() -> Element {
    let profile = content::profile();
    let description = profile.summary.clone();

    rsx! {
        document::Title { "{profile.name} | {profile.headline}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { property: "og:title", content: "{profile.name} | {profile.headline}" }
        document::Meta { property: "og:description", content: "{description}" }
        document::Meta { property: "og:type", content: "website" }
        document::Meta { property: "og:url", content: "{profile.site_url}" }
        StructuredData {}

        Hero {}
        About {}
        Skills {}
        Projects {}
        Contact {}
    }
}
