//! `propseal versions` — list registered cipher versions.

use console::style;

use crate::errors::Result;
use crate::version::Version;

/// Execute the `versions` command.
pub fn execute() -> Result<()> {
    for version in Version::ALL {
        if version == Version::latest() {
            println!("{version} {}", style("(default)").dim());
        } else {
            println!("{version}");
        }
    }
    Ok(())
}
