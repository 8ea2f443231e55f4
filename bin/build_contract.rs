//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use token_exchange;

fn main() {
    // The odra-build toolchain compiles the modules listed in Odra.toml to WASM
}
