use registrar::config::Config;

// Environment-variable tests run in one function to avoid racing each other
// across parallel test threads.
#[test]
fn test_config_load() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("CATALOG");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.catalog_path, "catalog.yaml");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("CATALOG", "/data/courses.yaml");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.catalog_path, "/data/courses.yaml");

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("CATALOG");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.catalog_path, cfg2.catalog_path);
}
