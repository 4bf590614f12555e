#![allow(clippy::style)]

extern crate autocfg;

use std::env;


fn main() {
    let ac = autocfg::new();
    ac.emit_rustc_version(1, 70);

    emit_limb_width_cfg();

    // cfg enabled by RUSTFLAGS="--cfg property_tests" to run slow property tests
    println!("cargo:rustc-check-cfg=cfg(property_tests)");
    println!("cargo:rustc-check-cfg=cfg(limb_bits_16)");
}

/// Select limb width from $RUST_BIGINT_LIMB_BITS (16 or 32, default 32)
fn emit_limb_width_cfg() {
    match env::var("RUST_BIGINT_LIMB_BITS") {
        Ok(s) if s == "16" => {
            println!("cargo:rustc-cfg=limb_bits_16");
        }
        Ok(s) if s == "32" => {}
        Err(_) => {}
        Ok(s) => {
            panic!("$RUST_BIGINT_LIMB_BITS must be 16 or 32 (got {:?})", s);
        }
    }

    println!("cargo:rerun-if-env-changed={}", "RUST_BIGINT_LIMB_BITS");
}
