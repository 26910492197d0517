pub mod build_info;
pub mod paths;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

const DEFAULT_DIRECTIVES: [&str; 3] = ["banquet_hub=info", "bhub_core=info", "bhub_storage_json=info"];

/// Installs the global subscriber, honouring `RUST_LOG` on top of the default directives.
pub fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES
        .iter()
        .filter_map(|raw| raw.parse::<Directive>().ok())
    {
        filter = filter.add_directive(directive);
    }
    // stderr keeps command output on stdout clean.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
