//! Build script for spincube
//!
//! Validates the cube shader with naga so WGSL errors surface during
//! `cargo build` rather than at runtime.

const CUBE_SHADER: &str = include_str!("shaders/cube.wgsl");

fn main() {
    println!("cargo:rerun-if-changed=shaders/cube.wgsl");

    if let Err(e) = validate_shader(CUBE_SHADER, "cube.wgsl") {
        panic!("Shader validation failed:\n{}", e);
    }
}

/// Validate a shader using naga
fn validate_shader(source: &str, name: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| format!("WGSL parse error for {}: {:?}", name, e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );

    validator
        .validate(&module)
        .map_err(|e| format!("Validation error for {}: {:?}", name, e))?;

    Ok(())
}
