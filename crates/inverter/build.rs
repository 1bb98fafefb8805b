use std::env;

fn main() {
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("apple-darwin") {
        // libobs symbols are resolved from the running OBS process.
        println!("cargo:rustc-link-arg=-Wl,-undefined,dynamic_lookup");
    }
}
