use anyhow::{Result, bail};

use ladle_core::service::LadleService;

pub(crate) fn cmd_theme(svc: &LadleService, mode: Option<&str>, json: bool) -> Result<()> {
    match mode {
        None => {
            let name = theme_name(svc.dark_mode()?);
            if json {
                println!("{}", serde_json::json!({ "theme": name }));
            } else {
                println!("Theme: {name}");
            }
        }
        Some("dark") => set(svc, true, json)?,
        Some("light") => set(svc, false, json)?,
        Some(other) => bail!("Invalid theme '{other}'. Use 'dark' or 'light'"),
    }
    Ok(())
}

fn set(svc: &LadleService, dark: bool, json: bool) -> Result<()> {
    svc.set_dark_mode(dark)?;
    let name = theme_name(dark);
    if json {
        println!("{}", serde_json::json!({ "theme": name }));
    } else {
        println!("Switched to the {name} theme");
    }
    Ok(())
}

fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
