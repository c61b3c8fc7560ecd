mod common;

use common::*;
use mshop_kernel::config::Settings;
use mshop_manager::prelude::*;
use mshop_manager::{ManagerKey, innermost};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn supplier_registry(built: &Arc<std::sync::atomic::AtomicUsize>) -> Registry {
    let builder = Registry::builder();
    let builder = probe(builder, "supplier", None, "Standard", built);
    let builder = probe(builder, "supplier", Some("lists"), "Standard", built);
    let builder = probe(builder, "supplier", Some("lists"), "Mysql", built);
    let builder = probe(builder, "supplier", Some("lists/type"), "Standard", built);
    let builder = tags(builder, &[
        "Common::Manager::Decorator::Changelog",
        "Common::Manager::Decorator::Lock",
        "Common::Manager::Decorator::Depth",
        "Common::Manager::Decorator::Public",
        "Supplier::Manager::Lists::Decorator::Sitecheck",
    ]);
    builder.build().unwrap()
}

#[test]
fn same_key_yields_same_instance() {
    let built = counter();
    let subs = SubManagers::new(Resolver::new(context(Settings::default()), supplier_registry(&built)));

    let first = subs.get("supplier", "lists", None).unwrap();
    let second = subs.get("SUPPLIER", "Lists", None).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(built.load(Ordering::SeqCst), 1);
    assert_eq!(subs.len(), 1);
}

#[test]
fn explicit_name_is_a_separate_entry() {
    let built = counter();
    let subs = SubManagers::new(Resolver::new(context(Settings::default()), supplier_registry(&built)));

    let configured = subs.get("supplier", "lists", None).unwrap();
    let explicit = subs.get("supplier", "lists", Some("Standard")).unwrap();

    assert!(!Arc::ptr_eq(&configured, &explicit));
    assert_eq!(configured.name(), explicit.name());
    assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn configured_name_selects_implementation() {
    let settings = Settings::default().with("mshop/supplier/manager/lists/name", json!("Mysql"));
    let subs = SubManagers::new(Resolver::new(context(settings), supplier_registry(&counter())));

    let manager = subs.get("supplier", "lists", None).unwrap();
    assert_eq!(manager.name().as_str(), "Supplier::Manager::Lists::Mysql");
}

#[test]
fn invalid_configured_name_fails() {
    let settings = Settings::default().with("mshop/supplier/manager/lists/name", json!("My-sql"));
    let subs = SubManagers::new(Resolver::new(context(settings), supplier_registry(&counter())));

    let err = subs.get("supplier", "lists", None).unwrap_err();
    assert_eq!(err.kind(), "Validation");
}

#[test]
fn invalid_tokens_fail_every_time() {
    let subs = SubManagers::new(Resolver::new(context(Settings::default()), supplier_registry(&counter())));

    for _ in 0..2 {
        assert_eq!(subs.get("supp-lier", "lists", None).unwrap_err().kind(), "Validation");
        assert_eq!(subs.get("supplier", "lists_type", None).unwrap_err().kind(), "Validation");
        assert_eq!(subs.get("supplier", "lists", Some("")).unwrap_err().kind(), "Validation");
        assert_eq!(subs.get("", "lists", None).unwrap_err().kind(), "Validation");
    }
    assert_eq!(subs.len(), 0);
}

#[test]
fn unknown_implementation_is_not_available() {
    let subs = SubManagers::new(Resolver::new(context(Settings::default()), supplier_registry(&counter())));

    let err = subs.get("supplier", "address", None).unwrap_err();
    assert_eq!(err.kind(), "NotAvailable");
    assert!(err.to_string().contains("Supplier::Manager::Address::Standard"));
}

#[test]
fn decorators_apply_in_configured_order() {
    let settings = Settings::default()
        .with("mshop/common/manager/decorators/default", json!(["Changelog", "Lock", "Depth"]))
        .with("mshop/supplier/manager/lists/decorators/excludes", json!(["Lock"]))
        .with("mshop/supplier/manager/lists/decorators/global", json!(["Public"]))
        .with("mshop/supplier/manager/lists/decorators/local", json!(["Sitecheck"]));
    let subs = SubManagers::new(Resolver::new(context(settings), supplier_registry(&counter())));

    let manager = subs.get("supplier", "lists", None).unwrap();

    assert_eq!(short_names(&manager), ["Changelog", "Depth", "Public", "Sitecheck"]);
    assert_eq!(manager.name().as_str(), "Supplier::Manager::Lists::Decorator::Sitecheck");
    assert!(manager.implements(&TypeName::decorator_interface()));
    assert!(manager.implements(&TypeName::parse("Supplier::Manager::Lists::Iface").unwrap()));
    assert_eq!(innermost(&manager).name().as_str(), "Supplier::Manager::Lists::Standard");
}

#[test]
fn excludes_are_per_manager() {
    let settings = Settings::default()
        .with("mshop/common/manager/decorators/default", json!(["Changelog", "Lock"]))
        .with("mshop/supplier/manager/lists/decorators/excludes", json!(["Lock"]));
    let subs = SubManagers::new(Resolver::new(context(settings), supplier_registry(&counter())));

    assert_eq!(short_names(&subs.get("supplier", "lists", None).unwrap()), ["Changelog"]);
    assert_eq!(short_names(&subs.get("supplier", "lists/type", None).unwrap()), ["Changelog", "Lock"]);
}

#[test]
fn unknown_decorator_is_not_available() {
    let settings = Settings::default().with("mshop/supplier/manager/lists/decorators/local", json!(["Missing"]));
    let subs = SubManagers::new(Resolver::new(context(settings), supplier_registry(&counter())));

    let err = subs.get("supplier", "lists", None).unwrap_err();
    assert_eq!(err.kind(), "NotAvailable");
    assert_eq!(err.context_message(), Some("decorator"));
    assert!(err.to_string().contains("Supplier::Manager::Lists::Decorator::Missing"));
}

#[test]
fn manager_without_interface_fails_composition() {
    let registry = Registry::builder()
        .manager("Supplier::Manager::Lists::Standard", |_| {
            Ok(Arc::new(Rogue(TypeName::parse("Supplier::Manager::Lists::Standard")?)) as ManagerHandle)
        })
        .build()
        .unwrap();
    let subs = SubManagers::new(Resolver::new(context(Settings::default()), registry));

    let err = subs.get("supplier", "lists", None).unwrap_err();
    assert_eq!(err.kind(), "Composition");
    assert!(err.to_string().contains("Supplier::Manager::Lists::Iface"));
}

#[test]
fn decorator_without_interface_fails_composition() {
    let built = counter();
    let registry = probe(Registry::builder(), "supplier", Some("lists"), "Standard", &built)
        .decorator("Common::Manager::Decorator::Passthrough", |inner, _| Ok(inner))
        .build()
        .unwrap();
    let settings =
        Settings::default().with("mshop/common/manager/decorators/default", json!(["Passthrough"]));
    let subs = SubManagers::new(Resolver::new(context(settings), registry));

    let err = subs.get("supplier", "lists", None).unwrap_err();
    assert_eq!(err.kind(), "Composition");
    assert!(err.to_string().contains("Common::Manager::Decorator::Iface"));
}

#[test]
fn shop_walks_sub_managers() {
    let built = counter();
    let shop = Shop::new(context(Settings::default()), supplier_registry(&built));

    let types = shop.create("supplier/lists/type").unwrap();
    assert_eq!(types.name().as_str(), "Supplier::Manager::Lists::Type::Standard");

    let again = shop.create("supplier/lists/type").unwrap();
    assert!(Arc::ptr_eq(&types, &again));
    assert_eq!(built.load(Ordering::SeqCst), 3);

    assert_eq!(shop.create("supplier//type").unwrap_err().kind(), "Validation");
    assert_eq!(shop.create("").unwrap_err().kind(), "Validation");
}

#[test]
fn sub_attributes_follow_configuration() {
    let settings = Settings::default()
        .with("mshop/supplier/manager/submanagers", json!(["lists"]))
        .with("mshop/supplier/manager/lists/submanagers", json!(["type"]));
    let shop = Shop::new(context(settings), supplier_registry(&counter()));

    let supplier = shop.create("supplier").unwrap();
    let codes: Vec<String> =
        supplier.search_attributes(true).unwrap().into_iter().map(|attribute| attribute.code).collect();

    assert_eq!(codes, ["supplier.id", "supplier.lists.id", "supplier.lists.type.id"]);
    assert_eq!(supplier.search_attributes(false).unwrap().len(), 1);
}

#[test]
fn registry_rejects_duplicates_and_malformed_names() {
    let duplicate = tags(Registry::builder(), &["Common::Manager::Decorator::Lock"; 2]).build().unwrap_err();
    assert_eq!(duplicate.kind(), "Composition");

    let malformed = tags(Registry::builder(), &["Common::Manager::Decorator::"]).build().unwrap_err();
    assert_eq!(malformed.kind(), "Validation");
}

#[test]
fn cache_key_is_visible_to_callers() {
    assert_eq!(ManagerKey::new("Supplier", Some("Lists"), None).to_string(), "supplier|lists|*");
}
