// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                _                                  _   _
  ___  ___  _ _| |_   ___ _ _ __ _ __| |_(_)__ ___
 (_-< / _ \| '_|  _| | '_ \ '_/ _` / _|  _| / _/ -_)
 /__/ \___/|_|  \__| | .__/_| \__,_\__|\__|_\__\___|
                     |_|

    Sorting Algorithm Practice
"#;
    println!("{}", banner);
}
