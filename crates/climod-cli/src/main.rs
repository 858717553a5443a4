use climod::parser;
use climod_params::{CliModule, Kind, Value};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Declare the demo module: one parameter per interesting kind,
/// covering flags, positional bindings, and decorations.
fn build_module() -> CliModule {
    let mut module = CliModule::new(
        "climod-demo",
        "Demonstrates declaring, parsing, and persisting typed parameters.",
    );
    module.meta.category = "Examples".to_string();
    module.meta.version = env!("CARGO_PKG_VERSION").to_string();
    module.meta.contributor = "climod developers".to_string();

    module
        .param("Basic", "Flag", Kind::Boolean)
        .declare("Toggle the demo flag", Some('b'))
        .set(Value::Boolean(true));

    module
        .param("EnumTypes", "Double Enum", Kind::DoubleEnum)
        .enumeration("0.1,0.2,0.3,0.4")
        .set(Value::Double(0.3));

    module
        .param("Vector Types", "Double Vec", Kind::DoubleSeq)
        .declare("A comma-separated list of doubles", None)
        .set_text("1,2,3,4");

    module
        .param("Special", "File", Kind::File)
        .file_extensions("bli,bla,blbub")
        .declare_index("Input File", 0)
        .channel(true);

    module
        .param("Special", "Slider", Kind::Double)
        .range(0.0, 1.0, 0.01)
        .declare("Slider position", None)
        .set(Value::Double(0.333));

    module
}

fn main() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let mut module = build_module();
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = parser::parse_command_line(&mut module, &mut args);

    if !outcome.diagnostics.is_empty() {
        eprintln!(
            "{} {} argument(s) were ignored (see --help)",
            "warning:".yellow().bold(),
            outcome.diagnostics.len()
        );
    }
    if !args.is_empty() {
        debug!(?args, "arguments left for downstream consumers");
    }
}
