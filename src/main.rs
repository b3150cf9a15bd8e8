//! Browser entry point: installs logging and mounts the root component.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("booklyn client starting");
    leptos::mount::mount_to_body(booklyn::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("booklyn is a browser application; build it with `trunk serve --features csr`");
}
