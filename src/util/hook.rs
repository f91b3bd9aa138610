use tracing::error;

use crate::ui::tui;

/// Installs color-eyre's report hook and a panic hook that restores the
/// terminal before printing the panic report.
pub fn install_hooks() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        let report = panic_hook.panic_report(panic_info);
        error!("{}", strip_ansi(&report.to_string()));
        eprintln!("{}", report);
    }));

    Ok(())
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
