use std::sync::OnceLock;

use pagemood_common::observability::LogConfig;

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let config = LogConfig {
            log_dir: Some(std::env::temp_dir().join("pagemood-tests")),
            verbose: true,
            default_filter: "debug",
        };

        pagemood_common::observability::init_logging(config).unwrap_or_default()
    });
}
