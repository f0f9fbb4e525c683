use folio_kernel::css::{classes, when};

#[test]
fn joins_non_empty_parts() {
    let class = classes(["project-card", "is-open", "shadow"]);
    assert_eq!(class, "project-card is-open shadow");
}

#[test]
fn skips_empty_and_whitespace_parts() {
    let class = classes(["nav-link", "", "  ", "is-active"]);
    assert_eq!(class, "nav-link is-active");
}

#[test]
fn when_gates_a_class_on_a_condition() {
    assert_eq!(when(true, "is-scrolled"), "is-scrolled");
    assert_eq!(when(false, "is-scrolled"), "");

    let beyond_threshold = false;
    assert_eq!(classes(["site-header", when(beyond_threshold, "is-scrolled")]), "site-header");
}

#[test]
fn empty_input_yields_empty_string() {
    let empty: [&str; 0] = [];
    assert_eq!(classes(empty), "");
}
