use clap::Parser;
use wasm_bindgen::prelude::*;

pub use game::{GameProps, GameView};

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameProps,
}

/// Parses arguments out of the location hash, e.g. `#-vv&--seed=42`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    let args = core::iter::once("").chain(
        location_hash
            .split(['#', '&'])
            .filter(|arg| !arg.is_empty()),
    );
    Args::try_parse_from(args)
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

    let (args, parse_error) = match parse_args(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args.game);

    // test harnesses load the module without a host page
    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<GameView>::with_root_and_props(root, args.game).render();
}
