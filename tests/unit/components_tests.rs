use design_catalog::domains::{ComponentLibrary, DesignTokens, Framework};

use crate::fixture_path;

fn library() -> ComponentLibrary {
    ComponentLibrary::open(&fixture_path("tests/fixtures/data"))
}

#[test]
fn search_ties_keep_file_order() {
    let library = library();
    let hits: Vec<(&str, Framework)> = library
        .search_components("button", None, None)
        .iter()
        .map(|s| (s.name.as_str(), s.framework))
        .collect();
    assert_eq!(
        hits,
        vec![("Button", Framework::React), ("Button", Framework::Vue)]
    );
}

#[test]
fn search_filters_by_framework_and_category() {
    let library = library();
    let vue = library.search_components("button", Some("VUE"), None);
    assert_eq!(vue.len(), 1);
    assert_eq!(vue[0].description, "Vue button");

    let modal = library.search_components("portal", None, Some("modal"));
    assert_eq!(modal.len(), 1);
    assert!(library.search_components("portal", None, Some("card")).is_empty());
}

#[test]
fn snippet_fields_parsed_from_store() {
    let library = library();
    let modal = library
        .snippets()
        .iter()
        .find(|s| s.name == "Modal")
        .unwrap();
    assert_eq!(modal.dependencies, vec!["react", "react-dom"]);
    let props: Vec<(&str, &str)> = modal
        .props
        .iter()
        .map(|p| (p.name.as_str(), p.ty.as_str()))
        .collect();
    assert_eq!(props, vec![("open", "boolean"), ("children", "React.ReactNode")]);

    let alert = library
        .snippets()
        .iter()
        .find(|s| s.name == "Alert")
        .unwrap();
    assert!(alert.props.is_empty());
    assert!(alert.preview.is_empty());
}

#[test]
fn generated_modal_extracts_imports_and_styles() {
    let library = library();
    let modal = library
        .generate_component("modal", Framework::React, None)
        .unwrap();
    assert_eq!(
        modal.imports,
        vec![
            "import React from 'react'",
            "import { createPortal } from 'react-dom'"
        ]
    );
    assert_eq!(modal.styles, "fixed inset-0");
    assert_eq!(modal.usage_example, "<Modal open>Hi</Modal>");
}

#[test]
fn tailwind_tokens_prepend_config_hint() {
    let library = library();
    let tokens = DesignTokens::default().with_color("primary", "#3366ff");
    let alert = library
        .generate_by_name("alert", "Tailwind", Some(&tokens))
        .unwrap();
    assert!(
        alert
            .code
            .starts_with("/* Apply these colors in tailwind.config.js:")
    );
    assert!(alert.code.contains("primary: '#3366ff'"));
    assert!(alert.code.contains("secondary: '#666666'"));
    assert_eq!(alert.styles, "p-4 bg-yellow-50");
}

#[test]
fn nextjs_tokens_become_css_variables() {
    let library = library();
    let tokens = DesignTokens::default().with_color("secondary", "#222");
    let navbar = library
        .generate_component("Navbar", Framework::NextJs, Some(&tokens))
        .unwrap();
    assert!(navbar.code.contains("--color-primary: #000000"));
    assert!(navbar.code.contains("--color-secondary: #222"));
    assert_eq!(navbar.imports, vec!["import Link from 'next/link'"]);
    assert_eq!(navbar.styles, "flex gap-4");
}

#[test]
fn vue_code_is_left_untouched() {
    let library = library();
    let tokens = DesignTokens::default().with_color("primary", "#3366ff");
    let button = library
        .generate_component("Button", Framework::Vue, Some(&tokens))
        .unwrap();
    assert_eq!(
        button.code,
        r#"<template><button class="btn"><slot /></button></template>"#
    );
    assert!(button.styles.is_empty());
}

#[test]
fn missing_components_yield_none() {
    let library = library();
    assert!(library.generate_component("Card", Framework::React, None).is_none());
    assert!(library.generate_by_name("Button", "ember", None).is_none());
}

#[test]
fn generate_for_framework_covers_every_snippet() {
    let library = library();
    let react = library.generate_for_framework(Framework::React, None);
    let names: Vec<&str> = react.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Button", "Modal"]);
    assert!(library.generate_for_framework(Framework::Svelte, None).is_empty());
}

#[test]
fn available_components_grouped_by_category() {
    let library = library();
    let all = library.get_available_components(None);
    assert_eq!(all["button"], vec!["Button", "Button"]);
    assert_eq!(all["feedback"], vec!["Alert"]);
    assert_eq!(all["modal"], vec!["Modal"]);
    assert_eq!(all["navigation"], vec!["Navbar"]);

    let react = library.get_available_components(Some(Framework::React));
    assert_eq!(react.keys().copied().collect::<Vec<_>>(), vec!["button", "modal"]);
}

#[test]
fn framework_listing_is_sorted() {
    let library = library();
    assert_eq!(
        library.list_frameworks(),
        vec!["html", "nextjs", "react", "svelte", "tailwind", "vue"]
    );
    assert_eq!(library.list_categories().len(), 10);
}
