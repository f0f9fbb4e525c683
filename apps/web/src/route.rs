use dioxus::prelude::*;

use crate::components::layout::SiteChrome;
use crate::pages::{Home, NotFound};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[layout(SiteChrome)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
