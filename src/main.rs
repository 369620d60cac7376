use dominant_color::{logging, DominantColorExtractor, Outcome, Settings, DEFAULT_INPUT_PATH};
use std::path::Path;

fn main() {
    let settings = Settings::default();
    logging::init_tracing(settings.debug_logging);

    let extractor = DominantColorExtractor::new(settings);
    let outcome = Outcome::from_result(extractor.extract_from_path(Path::new(DEFAULT_INPUT_PATH)));

    println!("{}", outcome);
    std::process::exit(outcome.exit_code());
}
