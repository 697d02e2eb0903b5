//! Binary entrypoint for the browser-hosted Batcomputer desktop.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("site_app runs in the browser; build it for wasm32 with the `csr` feature.");
}
