//! Environment source: SNAPFRAME__<SECTION>__<KEY>, e.g. SNAPFRAME__QUERY__COMPILATION=gtex

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("SNAPFRAME")
            .separator("__")
            .try_parsing(true),
    )
}
