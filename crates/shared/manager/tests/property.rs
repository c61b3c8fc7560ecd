mod common;

use common::*;
use mshop_kernel::config::Settings;
use mshop_manager::prelude::*;
use mshop_manager::{DecoratorSpec, DomainName, ImplName, ManagerLocation, ManagerPath};
use proptest::prelude::*;
use serde_json::json;

const DECORATORS: [&str; 6] = ["Changelog", "Lock", "Depth", "Public", "Sitecheck", "Cache"];

fn decorator_registry() -> Registry {
    let builder = probe(Registry::builder(), "supplier", Some("lists"), "Standard", &counter());
    let classes: Vec<String> = DECORATORS
        .iter()
        .map(|name| format!("Common::Manager::Decorator::{name}"))
        .chain(DECORATORS.iter().map(|name| format!("Supplier::Manager::Lists::Decorator::{name}")))
        .collect();
    let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
    tags(builder, &classes).build().unwrap()
}

proptest! {
    #[test]
    fn tokens_with_foreign_characters_fail(
        prefix in "[a-z0-9]{0,6}",
        bad in "[^a-zA-Z0-9]",
        suffix in "[a-z0-9]{0,6}",
    ) {
        let token = format!("{prefix}{bad}{suffix}");

        prop_assert!(DomainName::try_from(token.as_str()).is_err());
        prop_assert!(ImplName::try_from(token.as_str()).is_err());
        if bad != "/" {
            prop_assert!(ManagerPath::try_from(token.as_str()).is_err());
        }
    }

    #[test]
    fn alphanumeric_tokens_pass(token in "[a-zA-Z0-9]{1,12}") {
        let domain = DomainName::try_from(token.as_str()).unwrap();
        let path = ManagerPath::try_from(token.as_str()).unwrap();
        let implementation = ImplName::try_from(token.as_str()).unwrap();
        prop_assert_eq!(domain.as_str(), token.to_lowercase());
        prop_assert_eq!(path.as_str(), token.to_lowercase());
        prop_assert_eq!(implementation.as_str(), token.as_str());
    }

    #[test]
    fn resolving_invalid_domains_always_fails(bad in "[^a-zA-Z0-9]{1,4}") {
        let subs = SubManagers::new(Resolver::new(context(Settings::default()), decorator_registry()));
        prop_assert_eq!(subs.get(&bad, "lists", None).unwrap_err().kind(), "Validation");
        prop_assert_eq!(subs.get(&bad, "lists", None).unwrap_err().kind(), "Validation");
    }

    #[test]
    fn excluded_defaults_never_appear(
        defaults in proptest::sample::subsequence(DECORATORS.to_vec(), 0..=6),
        excludes in proptest::sample::subsequence(DECORATORS.to_vec(), 0..=6),
        local in proptest::sample::subsequence(DECORATORS.to_vec(), 0..=2),
    ) {
        let settings = Settings::default()
            .with("mshop/common/manager/decorators/default", json!(defaults))
            .with("mshop/supplier/manager/lists/decorators/excludes", json!(excludes))
            .with("mshop/supplier/manager/lists/decorators/local", json!(local));

        let location = ManagerLocation::parse("supplier", Some("lists")).unwrap();
        let spec = DecoratorSpec::from_config(&settings, &location).unwrap();
        let expected: Vec<&str> = defaults.iter().copied().filter(|name| !excludes.contains(name)).collect();
        prop_assert_eq!(spec.effective_defaults().collect::<Vec<_>>(), expected.clone());

        let subs = SubManagers::new(Resolver::new(context(settings), decorator_registry()));
        let manager = subs.get("supplier", "lists", None).unwrap();
        let chain: Vec<String> = mshop_manager::decorator_names(&manager).iter().map(ToString::to_string).collect();

        for excluded in &excludes {
            let common = format!("Common::Manager::Decorator::{excluded}");
            prop_assert!(!chain.contains(&common));
        }
        prop_assert_eq!(chain.len(), expected.len() + local.len());
    }
}
