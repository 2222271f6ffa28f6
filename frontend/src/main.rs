fn main() {
    #[cfg(target_arch = "wasm32")]
    leaveflow_frontend::boot();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("leaveflow-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
