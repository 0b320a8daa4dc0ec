// src/config.rs
use crate::args::Args;
use crate::options;
pub use comment_rate_engine::config::{Config, ConfigBuilder};
use comment_rate_engine::error::EngineError;
use comment_rate_engine::options::{self as engine_options, DocScan};

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::default();
        builder
            .path(args.path)
            .format(engine_options::OutputFormat::from(args.format))
            .doc_scan(if args.no_doc_scan {
                DocScan::Disabled
            } else {
                DocScan::Java
            })
            .fail_under(args.fail_under);

        if args.all_extensions {
            builder.allow_ext(Vec::<String>::new());
        } else if !args.ext.is_empty() {
            builder.allow_ext(args.ext);
        }

        Config::try_from_builder(&builder)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Json,
    Yaml,
    Md
);
