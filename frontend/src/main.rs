//! Entry point for the WASM application

pub fn main() {
    excel_processor_frontend::start();
}
