use colored::*;
use lvsm_core::resolver;

use crate::terminal::print;

pub fn port(token: &str) -> anyhow::Result<()> {
    let port: u16 = resolver::resolve_port(token)?;
    print::set_key_width([token]);
    print::aligned_line(token, port.to_string().green().bold());
    Ok(())
}

pub fn host(name: &str) -> anyhow::Result<()> {
    let addr = resolver::resolve_host(name)?;
    print::set_key_width([name]);
    print::aligned_line(name, addr.to_string().green().bold());
    Ok(())
}
