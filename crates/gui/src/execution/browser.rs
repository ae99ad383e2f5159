use std::process::Command;

/// Opens the given URL in the platform's default browser.
pub async fn open_in_browser(url: String) -> Result<(), String> {
    if cfg!(target_os = "macos") {
        launch("open", &[&url])
    } else if cfg!(target_os = "linux") {
        launch("xdg-open", &[&url])
    } else if cfg!(target_os = "windows") {
        // `start` treats the first quoted argument as a window title
        launch("cmd", &["/C", "start", "", &url])
    } else {
        Err("Unsupported operating system for opening a browser".to_string())
    }
}

fn launch(program: &str, args: &[&str]) -> Result<(), String> {
    match Command::new(program).args(args).spawn() {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("Failed to launch `{program}`: {e}")),
    }
}
