use clap::Parser;
use wasm_bindgen::prelude::*;

mod analytics;
mod card;
mod clues;
mod storage;
mod utils;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Heading used when the mount point has no `data-title`.
const DEFAULT_TITLE: &str = "BINGO";

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).unwrap_or_default();
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let root = document()
        .get_element_by_id("bingo")
        .expect("Could not find id=\"bingo\" element");
    let title = root
        .get_attribute("data-title")
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let clues = clues::clue_resource();
    log::debug!("clues: {}", clues);

    log::debug!("App started");
    yew::Renderer::<card::BingoCard>::with_root_and_props(
        root,
        card::CardProps {
            title: title.into(),
            clues: clues.into(),
        },
    )
    .render();
}
