//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use cclicense_core::{
    Attributes, License, SnippetRenderer, SnippetTemplate, TemplateVariables,
};

fn resolve_pairs(pairs: &[(&str, &str)]) -> License {
    License::resolve(&Attributes::from_pairs(pairs.iter().copied()))
}

fn check_license(license: &License, code: &str, title: &str) {
    assert_eq!(
        license.url,
        format!("http://creativecommons.org/licenses/{}/4.0/", code)
    );
    assert!(license
        .image
        .starts_with(&format!("https://i.creativecommons.org/l/{}/4.0/", code)));
    assert_eq!(
        license.title,
        format!("Creative Commons {} 4.0 International License", title)
    );
}

#[test]
fn invariant_no_attributes_resolves_to_attribution() {
    let license = resolve_pairs(&[]);
    check_license(&license, "by", "Attribution");
    assert!(license.metadata.is_none());
}

#[test]
fn invariant_explicit_license_codes() {
    let cases = [
        ("by", "Attribution"),
        ("by-nc", "Attribution-NonCommercial"),
        ("by-nc-nd", "Attribution-NonCommercial-NoDerivatives"),
        ("by-nc-sa", "Attribution-NonCommercial-ShareAlike"),
        ("by-nd", "Attribution-NoDerivatives"),
        ("by-sa", "Attribution-ShareAlike"),
    ];

    for (code, title) in cases {
        check_license(&resolve_pairs(&[("license", code)]), code, title);
    }
}

#[test]
fn invariant_unrecognized_license_falls_back_to_attribution() {
    let baseline = resolve_pairs(&[("license", "by")]);
    for bogus in ["by-nc-nd-sa", "mit", "BY", ""] {
        assert_eq!(resolve_pairs(&[("license", bogus)]), baseline);
    }
}

#[test]
fn invariant_adaptations_commercial_table() {
    let cases = [
        ("yes", "true", "by", "Attribution"),
        ("no", "true", "by-nd", "Attribution-NoDerivatives"),
        ("share-alike", "true", "by-sa", "Attribution-ShareAlike"),
        ("yes", "false", "by-nc", "Attribution-NonCommercial"),
        ("no", "false", "by-nc-nd", "Attribution-NonCommercial-NoDerivatives"),
        (
            "share-alike",
            "false",
            "by-nc-sa",
            "Attribution-NonCommercial-ShareAlike",
        ),
    ];

    for (adaptations, commercial, code, title) in cases {
        let license = resolve_pairs(&[("adaptations", adaptations), ("commercial", commercial)]);
        check_license(&license, code, title);
    }
}

#[test]
fn invariant_unrecognized_adaptations_ignores_commercial() {
    let baseline = resolve_pairs(&[]);
    assert_eq!(resolve_pairs(&[("adaptations", "maybe")]), baseline);
    assert_eq!(
        resolve_pairs(&[("adaptations", "maybe"), ("commercial", "false")]),
        baseline
    );
}

#[test]
fn invariant_commercial_presence_asymmetry() {
    // Absent (or empty) means allowed; any present value other than the
    // literal "true" means not allowed.
    check_license(&resolve_pairs(&[("adaptations", "yes")]), "by", "Attribution");
    check_license(
        &resolve_pairs(&[("adaptations", "yes"), ("commercial", "")]),
        "by",
        "Attribution",
    );

    for value in ["TRUE", "1", "yes", "false"] {
        check_license(
            &resolve_pairs(&[("adaptations", "yes"), ("commercial", value)]),
            "by-nc",
            "Attribution-NonCommercial",
        );
    }
}

#[test]
fn invariant_icon_sizes() {
    let normal = resolve_pairs(&[("icon", "88x31")]);
    assert_eq!((normal.image_width, normal.image_height), (88, 31));
    assert!(normal.image.ends_with("88x31.png"));

    let compact = resolve_pairs(&[("icon", "80x15")]);
    assert_eq!((compact.image_width, compact.image_height), (80, 15));
    assert!(compact.image.ends_with("80x15.png"));

    for fallback in [&[][..], &[("icon", "120x40")][..]] {
        let license = resolve_pairs(fallback);
        assert_eq!((license.image_width, license.image_height), (88, 31));
        assert!(license.image.ends_with("88x31.png"));
    }
}

#[test]
fn invariant_resolution_is_idempotent() {
    let pairs = [
        ("adaptations", "no"),
        ("commercial", "false"),
        ("work-title", "The work"),
        ("format", "Audio"),
    ];

    assert_eq!(
        License::resolve(&Attributes::from_pairs(pairs)),
        License::resolve(&Attributes::from_pairs(pairs))
    );
}

#[test]
fn invariant_derived_scenario_by_nc_nd() {
    let license = resolve_pairs(&[("adaptations", "no"), ("commercial", "false")]);
    assert_eq!(license.url, "http://creativecommons.org/licenses/by-nc-nd/4.0/");
    assert_eq!(
        license.title,
        "Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International License"
    );
}

#[test]
fn invariant_no_metadata_projects_defaults() {
    let variables = TemplateVariables::project(&resolve_pairs(&[]));
    assert_eq!(variables.work, "This work");
    assert_eq!(variables.attribution, "");
    assert_eq!(variables.source, "");
    assert_eq!(variables.permissions, "");
    assert_eq!(variables.image_width, "88");
    assert_eq!(variables.image_height, "31");
}

#[test]
fn invariant_format_without_title_wraps_literal_work() {
    let variables = TemplateVariables::project(&resolve_pairs(&[("format", "Audio")]));
    assert!(variables
        .work
        .contains(r#"href="http://purl.org/dc/dcmitype/Sound""#));
    assert!(variables.work.contains(r#"rel="dct:type""#));
    assert!(variables.work.starts_with("This "));
    assert!(variables.work.contains(">work</span>"));
}

#[test]
fn invariant_format_labels_map_to_dcmi_types() {
    let cases = [
        ("Audio", "http://purl.org/dc/dcmitype/Sound"),
        ("Video", "http://purl.org/dc/dcmitype/MovingImage"),
        ("Image", "http://purl.org/dc/dcmitype/StillImage"),
        ("Text", "http://purl.org/dc/dcmitype/Text"),
        ("Dataset", "http://purl.org/dc/dcmitype/Dataset"),
        ("Interactive", "http://purl.org/dc/dcmitype/InteractiveResource"),
    ];

    for (label, uri) in cases {
        let license = resolve_pairs(&[("work-title", "The work"), ("format", label)]);
        let metadata = license.metadata.as_ref().unwrap();
        assert_eq!(metadata.format.as_deref(), Some(uri));

        let variables = TemplateVariables::project(&license);
        assert!(variables.work.contains(&format!(r#"href="{}""#, uri)));
        assert!(variables.work.contains(r#"property="dct:title""#));
        assert!(variables.work.contains("The work"));
    }
}

#[test]
fn invariant_unrecognized_format_is_dropped() {
    let license = resolve_pairs(&[("format", "sculpture")]);
    assert!(license.metadata.is_none());
    assert_eq!(TemplateVariables::project(&license).work, "This work");

    // Case folding still applies to recognized labels.
    let license = resolve_pairs(&[("format", "aUdIo")]);
    assert_eq!(
        license.metadata.unwrap().format.as_deref(),
        Some("http://purl.org/dc/dcmitype/Sound")
    );
}

#[test]
fn invariant_attribution_url_doubles_as_link_text() {
    let url = "http://jesus.perezpaz.es";
    let variables = TemplateVariables::project(&resolve_pairs(&[("attribution-url", url)]));
    assert!(variables.attribution.contains(&format!(r#"href="{}""#, url)));
    assert!(variables.attribution.contains(r#"rel="cc:attributionURL""#));
    assert!(variables.attribution.contains(&format!(">{}</a>", url)));
}

#[test]
fn invariant_attribution_title_without_url_renders_span() {
    let variables =
        TemplateVariables::project(&resolve_pairs(&[("attribution-title", "Jesus Perez")]));
    assert!(variables.attribution.contains(r#"property="cc:attributionName""#));
    assert!(variables.attribution.contains("<span"));
    assert!(variables.attribution.contains("Jesus Perez"));
    assert!(!variables.attribution.contains("<a"));
}

#[test]
fn invariant_attribution_title_with_url_prefers_title_text() {
    let variables = TemplateVariables::project(&resolve_pairs(&[
        ("attribution-title", "Jesus Perez"),
        ("attribution-url", "http://jesus.perezpaz.es"),
    ]));
    assert!(variables.attribution.contains(">Jesus Perez</a>"));
    assert!(variables
        .attribution
        .contains(r#"href="http://jesus.perezpaz.es""#));
}

#[test]
fn invariant_source_and_permissions_sentences() {
    let variables = TemplateVariables::project(&resolve_pairs(&[
        ("source", "http://example.org/original"),
        ("permissions", "http://example.org/more"),
    ]));

    assert!(variables.source.contains("Based on a work at"));
    assert!(variables.source.contains(r#"rel="dct:source""#));
    assert!(variables.source.contains(r#"href="http://example.org/original""#));

    assert!(variables
        .permissions
        .contains("Permissions beyond the scope of this license may be available at"));
    assert!(variables.permissions.contains(r#"rel="cc:morePermissions""#));
    assert!(variables.permissions.contains(r#"href="http://example.org/more""#));
}

#[test]
fn invariant_hyphenated_and_camel_keys_agree() {
    let hyphenated = resolve_pairs(&[
        ("work-title", "The work"),
        ("attribution-url", "http://a.example"),
    ]);
    let camel = resolve_pairs(&[
        ("workTitle", "The work"),
        ("attributionUrl", "http://a.example"),
    ]);
    assert_eq!(hyphenated, camel);

    // Unrecognized names contribute nothing.
    assert_eq!(resolve_pairs(&[("data-attribute", "x")]), resolve_pairs(&[]));
}

#[test]
fn invariant_empty_strings_are_absent() {
    let license = resolve_pairs(&[("work-title", ""), ("source", ""), ("format", "")]);
    assert!(license.metadata.is_none());
}

#[test]
fn invariant_payload_accepts_hyphenated_aliases() {
    let attributes: Attributes = serde_json::from_str(
        r#"{"license": "by-sa", "work-title": "The work", "attributionUrl": "http://a.example"}"#,
    )
    .unwrap();

    let license = License::resolve(&attributes);
    check_license(&license, "by-sa", "Attribution-ShareAlike");

    let metadata = license.metadata.unwrap();
    assert_eq!(metadata.work_title.as_deref(), Some("The work"));
    assert_eq!(metadata.attribution_url.as_deref(), Some("http://a.example"));
}

#[test]
fn invariant_license_serializes_camel_case() {
    let json = serde_json::to_value(resolve_pairs(&[])).unwrap();
    assert_eq!(json["imageWidth"], 88);
    assert_eq!(json["imageHeight"], 31);
    assert!(json.get("metadata").is_none());
}

#[test]
fn invariant_default_render_contains_badge_and_links() {
    let renderer = SnippetRenderer::default();
    let snippet = renderer.render(&Attributes::default());

    assert!(snippet.contains(r#"src="https://i.creativecommons.org/l/by/4.0/88x31.png""#));
    assert!(snippet.contains(r#"href="http://creativecommons.org/licenses/by/4.0/""#));
    assert!(snippet.contains("Creative Commons Attribution 4.0 International License"));
    assert!(snippet.contains("This work"));
    assert!(snippet.contains(r#"rel="license""#));
    assert!(!snippet.contains("{{"));
}

#[test]
fn invariant_template_loads_from_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snippet.html");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "<p>{{{{work}}}} - {{{{title}}}}</p>").unwrap();

    let template = SnippetTemplate::load(&path).unwrap();
    let variables = TemplateVariables::project(&resolve_pairs(&[]));
    assert_eq!(
        template.substitute(&variables),
        format!("<p>This work - {}</p>", variables.title)
    );
}
