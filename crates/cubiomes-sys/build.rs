use std::env;
use std::path::PathBuf;

/// Library sources compiled into `libcubiomes.a`.
const SOURCES: &[&str] = &[
    "biomenoise.c",
    "biomes.c",
    "finders.c",
    "generator.c",
    "layers.c",
    "noise.c",
    "util.c",
];

fn main() {
    println!("cargo:rustc-check-cfg=cfg(cubiomes_linked)");
    println!("cargo:rerun-if-env-changed=CUBIOMES_DIR");
    println!("cargo:rerun-if-changed=cubiomes_helper.c");

    // CUBIOMES_DIR wins over the in-tree checkout.
    let dir = env::var_os("CUBIOMES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cubiomes"));

    if !dir.join("generator.h").exists() {
        println!(
            "cargo:warning=cubiomes sources not found in {}; set CUBIOMES_DIR or clone \
             https://github.com/Cubitect/cubiomes into crates/cubiomes-sys/cubiomes",
            dir.display()
        );
        return;
    }

    let mut build = cc::Build::new();
    for source in SOURCES {
        build.file(dir.join(source));
    }
    build
        .file("cubiomes_helper.c")
        .include(&dir)
        .opt_level(3)
        .warnings(false)
        .compile("cubiomes");

    println!("cargo:rerun-if-changed={}", dir.display());
    println!("cargo:rustc-cfg=cubiomes_linked");
}
