use mshop_domain::constants::{CONFIG_ROOT, DEFAULT_DECORATORS, DEFAULT_IMPLEMENTATION, DEFAULT_SITE};

#[test]
fn constants_match_configuration_layout() {
    assert_eq!(DEFAULT_IMPLEMENTATION, "Standard");
    assert_eq!(DEFAULT_SITE, "default");
    assert!(DEFAULT_DECORATORS.starts_with(CONFIG_ROOT));
    assert_eq!(DEFAULT_DECORATORS, "mshop/common/manager/decorators/default");
}
